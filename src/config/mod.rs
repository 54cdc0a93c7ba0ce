//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 구조체의 연관 함수로 노출하며,
//! 호출 시점에 값을 읽기 때문에 별도의 전역 컨테이너가 필요 없습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 해싱, 서버, 데이터베이스 설정
//! - [`auth_config`] - JWT 토큰 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="pusan_trip"
//! export USER_STORE="mongodb"       # mongodb | memory
//!
//! # 보안 설정
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export BCRYPT_COST="12"           # 4-15 범위
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

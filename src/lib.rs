//! 부산 여행 플래너 계정 서비스 백엔드
//!
//! 회원가입, 로그인, 닉네임/비밀번호/프로필 이미지 변경, 마이페이지 조회를 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 로그인 아이디, 이메일, 닉네임 유니크 보장
//! - **JWT 발급**: 로그인 성공 시 액세스 토큰 발급
//! - **bcrypt**: 환경별 cost를 적용한 비밀번호 해싱
//! - **MongoDB**: 사용자 데이터 영구 저장 (메모리 저장소로 대체 가능)
//! - **생성자 주입**: 모든 협력 객체를 트레이트 객체로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pusan_trip_account::repositories::users::InMemoryUserRepository;
//! use pusan_trip_account::services::{
//!     auth::{BcryptPasswordHasher, TokenService},
//!     users::UserService,
//! };
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(BcryptPasswordHasher::from_env()),
//!     Arc::new(TokenService::from_env()),
//! );
//!
//! let signed_up = service.signup(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

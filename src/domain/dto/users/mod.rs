//! 사용자 DTO 모듈
//!
//! 계정 관련 요청/응답 데이터 구조를 정의합니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;

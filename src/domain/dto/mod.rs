//! # Data Transfer Objects
//!
//! 어댑터 계층과 서비스 계층 사이에서 주고받는 데이터 구조를 정의합니다.
//!
//! - [`users`] - 계정 관련 요청/응답
//! - [`api_response`] - 모든 HTTP 응답을 감싸는 공통 봉투

pub mod users;
pub mod api_response;

pub use api_response::ApiResponse;

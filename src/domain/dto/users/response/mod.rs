//! 사용자 응답 DTO 모듈
//!
//! 엔티티의 민감 정보(비밀번호 해시)를 제외한 형태로 클라이언트에 전달됩니다.

pub mod user_response;

pub use user_response::{LoginResponse, MyPageResponse, NicknameAvailabilityResponse, SignupResponse};

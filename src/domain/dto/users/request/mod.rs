//! 사용자 요청 DTO 모듈
//!
//! - [`signup_request`] - 회원가입
//! - [`login_request`] - 로그인
//! - [`account_update_request`] - 닉네임/비밀번호/프로필 이미지 변경

pub mod signup_request;
pub mod login_request;
pub mod account_update_request;

pub use signup_request::SignupRequest;
pub use login_request::LoginRequest;
pub use account_update_request::{
    NicknameCheckQuery, NicknameRequest, PasswordChangeRequest, ProfileImageRequest,
};

//! 사용자 관리 서비스 모듈
//!
//! 가입, 로그인, 닉네임/비밀번호/프로필 이미지 변경, 마이페이지 조회를 담당합니다.

pub mod user_service;

pub use user_service::UserService;

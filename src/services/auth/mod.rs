//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱과 액세스 토큰 발급을 담당합니다.
//! 두 기능 모두 트레이트 뒤에 숨겨져 있어 [`UserService`](crate::services::users::UserService)에
//! 생성자로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{BcryptPasswordHasher, TokenService};
//!
//! let hasher = BcryptPasswordHasher::from_env();
//! let tokens = TokenService::from_env();
//! let access_token = tokens.issue("kim01")?;
//! ```

pub mod password_hasher;
pub mod token_service;

pub use password_hasher::*;
pub use token_service::*;

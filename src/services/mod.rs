//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 협력 객체는 생성자로 주입되며, 서비스는 HTTP와 저장소 구현을 알지 못합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryUserRepository;
//! use crate::services::{auth::{BcryptPasswordHasher, TokenService}, users::UserService};
//!
//! let user_service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(BcryptPasswordHasher::from_env()),
//!     Arc::new(TokenService::from_env()),
//! );
//! ```

pub mod users;
pub mod auth;

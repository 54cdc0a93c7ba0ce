//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`] 트레이트에만 의존합니다.
//!
//! - [`UserRepository`] - MongoDB 구현 (운영)
//! - [`InMemoryUserRepository`] - 메모리 구현 (로컬 실행, 테스트)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = store.find_by_email("user@example.com").await?;
//! ```

pub mod user_store;
pub mod user_repo;
pub mod memory_user_repo;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
pub use memory_user_repo::InMemoryUserRepository;

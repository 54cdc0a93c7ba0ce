//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 구현은 생성자로 주입되며, 서비스는 트레이트 객체로만 접근합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(Arc::new(database));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;

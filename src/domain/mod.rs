//! # Domain Layer
//!
//! 계정 도메인의 엔티티, DTO, 값 객체를 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/   User 엔티티 (MongoDB 문서와 1:1 매핑)
//! ├── dto/        요청/응답 DTO와 ApiResponse 봉투
//! └── models/     토큰 클레임
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::user::User;
pub use dto::ApiResponse;
pub use models::token::TokenClaims;

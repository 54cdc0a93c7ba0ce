//! # Domain Models
//!
//! 엔티티가 아닌 값 객체들을 정의합니다.
//!
//! - [`token`] - 액세스 토큰 클레임

pub mod token;

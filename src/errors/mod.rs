//! 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)와 관련 타입 별칭, 확장 trait을 제공합니다.

pub mod errors;

pub use errors::*;

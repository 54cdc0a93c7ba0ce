//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 공백 검증 유틸리티

pub mod string_utils;

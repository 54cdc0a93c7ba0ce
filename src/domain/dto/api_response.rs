//! 공통 API 응답 봉투
//!
//! 모든 HTTP 응답은 다음 형식을 따릅니다:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "요청이 성공적으로 처리되었습니다.",
//!   "data": { ... },
//!   "timestamp": "2026-10-18T12:00:00+00:00"
//! }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

const DEFAULT_SUCCESS_MESSAGE: &str = "요청이 성공적으로 처리되었습니다.";

/// 성공/실패 여부와 데이터를 감싸는 응답 구조체
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// 기본 메시지와 함께 성공 응답 생성
    pub fn success(data: T) -> Self {
        Self::success_with_message(DEFAULT_SUCCESS_MESSAGE, data)
    }

    /// 지정한 메시지와 함께 성공 응답 생성
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// 데이터 없는 실패 응답 생성
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

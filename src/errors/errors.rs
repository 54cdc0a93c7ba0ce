//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | 발생 상황 |
//! |----------|-------------|-----------|
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 |
//! | `DuplicateIdentity` | 409 Conflict | 가입 시 이메일/아이디/닉네임 중복 |
//! | `InvalidCredential` | 401 Unauthorized | 비밀번호 불일치 |
//! | `Mismatch` | 400 Bad Request | 새 비밀번호와 확인 비밀번호 불일치 |
//! | `PolicyViolation` | 400 Bad Request | 비밀번호 정책 위반 (길이 미달) |
//! | `InvalidInput` | 400 Bad Request | 필수 값 누락, 공백 입력 |
//! | `Conflict` | 409 Conflict | 이미 사용 중인 닉네임 |
//! | `StaleVersion` | 409 Conflict | 읽은 이후 다른 요청이 같은 사용자를 먼저 수정함 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 해싱/토큰 서명 등 내부 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find(repo: &dyn UserStore, id: &str) -> Result<User, AppError> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("존재하지 않는 사용자입니다.".to_string()))
//! }
//! ```

use thiserror::Error;
use crate::domain::dto::api_response::ApiResponse;

/// 애플리케이션 전역 에러 타입
///
/// 계정 관리 과정에서 발생할 수 있는 모든 실패를 이름 있는 변형으로 표현합니다.
/// 비즈니스 규칙 위반은 재시도해도 결과가 같으므로 호출자에게 그대로 전달되며,
/// 인프라 계층 에러(`DatabaseError`, `InternalError`)만 일시적일 수 있습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 참조한 사용자가 존재하지 않음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 가입 시 고유 제약 조건 위반 (409 Conflict)
    ///
    /// 이메일, 로그인 아이디, 닉네임 중 하나라도 이미 존재하는 경우입니다.
    #[error("Duplicate identity: {0}")]
    DuplicateIdentity(String),

    /// 비밀번호 또는 현재 비밀번호 불일치 (401 Unauthorized)
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// 새 비밀번호와 확인 비밀번호 불일치 (400 Bad Request)
    #[error("Mismatch: {0}")]
    Mismatch(String),

    /// 비밀번호 정책 위반 (400 Bad Request)
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    /// 필수 입력값 누락 또는 공백 (400 Bad Request)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 이미 다른 사용자가 쓰고 있는 닉네임 (409 Conflict)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 저장소의 `version`이 읽은 시점과 다름 (409 Conflict)
    ///
    /// 서비스 계층은 이 에러를 받으면 사용자를 다시 읽어 검증부터 재시도하며,
    /// 재시도 횟수를 모두 소진한 경우에만 호출자에게 전달됩니다.
    #[error("Stale version: {0}")]
    StaleVersion(String),

    /// 저장소 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 보여줄 메시지를 반환합니다.
    ///
    /// 5xx 에러는 내부 정보를 숨기고 일반 메시지로 대체합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::DuplicateIdentity(msg)
            | AppError::InvalidCredential(msg)
            | AppError::Mismatch(msg)
            | AppError::PolicyViolation(msg)
            | AppError::InvalidInput(msg)
            | AppError::Conflict(msg)
            | AppError::StaleVersion(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "서버 오류가 발생했습니다.".to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateIdentity(_) | AppError::Conflict(_) | AppError::StaleVersion(_) => {
                StatusCode::CONFLICT
            }
            AppError::InvalidCredential(_) => StatusCode::UNAUTHORIZED,
            AppError::Mismatch(_) | AppError::PolicyViolation(_) | AppError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러는 `ApiResponse` 에러 봉투로 감싸져 전달됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::error(self.client_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

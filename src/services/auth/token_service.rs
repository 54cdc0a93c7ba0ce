//! JWT 토큰 발급 서비스 구현
//!
//! 로그인 성공 시 발급하는 액세스 토큰을 생성합니다.
//! 토큰 검증, 리프레시 토큰, 토큰 폐기는 다루지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;
use crate::{
    config::JwtConfig,
    domain::models::token::TokenClaims,
    errors::{AppError, ErrorContext},
};

/// 액세스 토큰 발급 계약
pub trait TokenIssuer: Send + Sync {
    /// 주어진 주체(로그인 아이디)에 대한 불투명 토큰 문자열을 발급합니다.
    fn issue(&self, subject: &str) -> Result<String, AppError>;
}

/// JWT 토큰 발급 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성합니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS` 설정으로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::from_env();
    /// let access_token = token_service.generate_access_token("kim01")?;
    /// ```
    pub fn generate_access_token(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .with_context(|| format!("JWT 토큰 생성 실패 (sub={})", subject))
    }
}

impl TokenIssuer for TokenService {
    fn issue(&self, subject: &str) -> Result<String, AppError> {
        self.generate_access_token(subject)
    }
}

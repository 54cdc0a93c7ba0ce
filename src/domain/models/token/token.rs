//! JWT 액세스 토큰 클레임
//!
//! RFC 7519 표준 클레임만 사용하며, 주체(`sub`)는 로그인 아이디입니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (로그인 아이디)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 식별자 (같은 초에 발급된 토큰도 서로 다름)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

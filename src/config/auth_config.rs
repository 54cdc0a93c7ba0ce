//! 인증 관련 설정 관리 모듈
//!
//! 액세스 토큰 발급에 사용되는 JWT 설정을 관리합니다.

use std::env;

/// 개발 환경에서만 사용하는 기본 서명 키
const DEFAULT_JWT_SECRET: &str = "pusan-trip-dev-secret";

/// JWT 토큰 설정을 관리하는 구조체
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간
/// - **프로덕션**: 액세스 토큰 1-2시간
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 최소 256비트 길이의 무작위 키를 사용해야 합니다.
    /// 환경 변수가 없으면 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// export JWT_SECRET="..."
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEFAULT_JWT_SECRET.to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다. 기본값: 24
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|hours: &i64| *hours > 0)
            .unwrap_or(24)
    }
}

//! 비밀번호 해싱 서비스
//!
//! 평문 비밀번호는 이 모듈 밖으로 저장되지 않으며,
//! 저장소에는 항상 bcrypt 해시만 기록됩니다.

use crate::{
    config::PasswordConfig,
    errors::{AppError, ErrorContext},
};

/// 단방향 비밀번호 해시 계약
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 해시합니다. 같은 입력이라도 솔트 때문에 결과는 매번 다릅니다.
    fn hash(&self, raw_password: &str) -> Result<String, AppError>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    fn verify(&self, raw_password: &str, password_hash: &str) -> Result<bool, AppError>;
}

/// bcrypt 기반 [`PasswordHasher`] 구현
///
/// # 환경별 Cost
///
/// | 환경 | Cost |
/// |------|------|
/// | development, test | 4 |
/// | staging | 10 |
/// | production | 12 |
///
/// `BCRYPT_COST` 환경 변수로 덮어쓸 수 있습니다.
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정의 cost로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, raw_password: &str) -> Result<String, AppError> {
        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(raw_password, self.cost)
            .context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }

    fn verify(&self, raw_password: &str, password_hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(raw_password, password_hash)
            .context("비밀번호 검증 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_match() {
        let hasher = BcryptPasswordHasher::new(4);
        let hashed = hasher.hash("pw12345678").unwrap();

        assert_ne!(hashed, "pw12345678");
        assert!(hasher.verify("pw12345678", &hashed).unwrap());
        assert!(!hasher.verify("pw12345679", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = BcryptPasswordHasher::new(4);

        let first = hasher.hash("same-password").unwrap();
        let second = hasher.hash("same-password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same-password", &first).unwrap());
        assert!(hasher.verify("same-password", &second).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        let hasher = BcryptPasswordHasher::new(4);

        match hasher.verify("pw", "not-a-bcrypt-hash") {
            Err(AppError::InternalError(msg)) => assert!(msg.starts_with("비밀번호 검증 실패: ")),
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}

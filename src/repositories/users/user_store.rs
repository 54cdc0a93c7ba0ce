//! 사용자 저장소 추상화
//!
//! 서비스 계층은 이 트레이트에만 의존하며, 실제 구현은
//! [`UserRepository`](super::user_repo::UserRepository) (MongoDB) 또는
//! [`InMemoryUserRepository`](super::memory_user_repo::InMemoryUserRepository) 입니다.

use async_trait::async_trait;
use crate::{
    domain::entities::users::user::User,
    errors::AppError,
};

pub const DUPLICATE_LOGIN_ID_MESSAGE: &str = "이미 사용 중인 아이디입니다.";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "이미 사용 중인 이메일입니다.";
pub const DUPLICATE_DISPLAY_NAME_MESSAGE: &str = "이미 사용 중인 닉네임입니다.";
pub const STALE_VERSION_MESSAGE: &str = "다른 요청에 의해 계정 정보가 변경되었습니다. 다시 시도해주세요.";
pub const USER_NOT_FOUND_MESSAGE: &str = "존재하지 않는 사용자입니다.";

/// 사용자 영속성 계약
///
/// # 유니크 제약
///
/// `login_id`, `email`, `display_name`은 저장소 전체에서 유일해야 하며,
/// 사전 조회와 무관하게 저장소가 최종적으로 이를 보장합니다.
///
/// # 동시성
///
/// [`update`](UserStore::update)는 `version` 기반 낙관적 동시성 제어를 따릅니다.
/// 호출자가 읽은 시점의 `version`과 저장된 값이 다르면 `StaleVersion`을 반환하고
/// 아무것도 쓰지 않습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID 문자열로 조회합니다. 형식이 잘못된 ID는 존재하지 않는 것으로 취급합니다.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>, AppError>;

    /// 닉네임 사용 여부 (정확히 일치하는 경우만)
    async fn exists_by_display_name(&self, display_name: &str) -> Result<bool, AppError> {
        Ok(self.find_by_display_name(display_name).await?.is_some())
    }

    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `DuplicateIdentity` - 아이디, 이메일, 닉네임 중 하나라도 이미 존재
    async fn save(&self, user: User) -> Result<User, AppError>;

    /// 기존 사용자의 변경 가능한 필드(닉네임, 비밀번호 해시, 프로필 이미지)를 반영합니다.
    ///
    /// 성공 시 `version`이 1 증가한 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 ID의 사용자가 없음
    /// * `StaleVersion` - 읽은 이후 다른 요청이 먼저 갱신함
    /// * `Conflict` - 다른 사용자가 같은 닉네임을 사용 중
    async fn update(&self, user: &User) -> Result<User, AppError>;
}

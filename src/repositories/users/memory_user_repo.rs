//! 메모리 기반 사용자 저장소
//!
//! 로컬 실행(`USER_STORE=memory`)과 테스트에서 사용하는 [`UserStore`] 구현체입니다.
//! 모든 검사와 쓰기를 하나의 쓰기 잠금 안에서 수행하므로
//! 유니크 제약과 버전 검사가 MongoDB 구현과 같은 원자성을 가집니다.

use std::collections::HashMap;
use async_trait::async_trait;
use log::warn;
use mongodb::bson::{oid::ObjectId, DateTime};
use tokio::sync::RwLock;
use crate::{
    domain::entities::users::user::User,
    errors::AppError,
};
use super::user_store::{
    UserStore, DUPLICATE_DISPLAY_NAME_MESSAGE, DUPLICATE_EMAIL_MESSAGE,
    DUPLICATE_LOGIN_ID_MESSAGE, STALE_VERSION_MESSAGE, USER_NOT_FOUND_MESSAGE,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn find_by<F>(&self, predicate: F) -> Option<User>
    where
        F: Fn(&User) -> bool,
    {
        self.users
            .read()
            .await
            .values()
            .find(|user| predicate(user))
            .cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self.users.read().await.get(&object_id).cloned())
    }

    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_by(|user| user.login_id == login_id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_by(|user| user.email == email).await)
    }

    async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_by(|user| user.display_name == display_name).await)
    }

    async fn save(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        for existing in users.values() {
            let message = if existing.login_id == user.login_id {
                DUPLICATE_LOGIN_ID_MESSAGE
            } else if existing.email == user.email {
                DUPLICATE_EMAIL_MESSAGE
            } else if existing.display_name == user.display_name {
                DUPLICATE_DISPLAY_NAME_MESSAGE
            } else {
                continue;
            };

            warn!("사용자 저장 중 중복 발견: {}", message);
            return Err(AppError::DuplicateIdentity(message.to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        user.version = 0;
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let object_id = user.id
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        let mut users = self.users.write().await;

        let stored_version = users
            .get(&object_id)
            .map(|stored| stored.version)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        if stored_version != user.version {
            warn!("버전 불일치로 사용자 갱신 거부: id={}, version={}", object_id, user.version);
            return Err(AppError::StaleVersion(STALE_VERSION_MESSAGE.to_string()));
        }

        let name_taken = users
            .iter()
            .any(|(id, other)| *id != object_id && other.display_name == user.display_name);
        if name_taken {
            return Err(AppError::Conflict(DUPLICATE_DISPLAY_NAME_MESSAGE.to_string()));
        }

        let stored = users
            .get_mut(&object_id)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;
        stored.display_name = user.display_name.clone();
        stored.password_hash = user.password_hash.clone();
        stored.profile_image = user.profile_image.clone();
        stored.updated_at = DateTime::now();
        stored.version += 1;

        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(login_id: &str, display_name: &str, email: &str) -> User {
        User::new(
            login_id.to_string(),
            "$2b$04$hash".to_string(),
            display_name.to_string(),
            email.to_string(),
        )
    }

    #[actix_web::test]
    async fn test_save_assigns_id_and_lookups_work() {
        let repo = InMemoryUserRepository::new();

        let saved = repo.save(user("kim01", "Kim", "kim@x.com")).await.unwrap();
        let id = saved.id_string().unwrap();

        assert_eq!(repo.find_by_id(&id).await.unwrap().unwrap().login_id, "kim01");
        assert!(repo.find_by_login_id("kim01").await.unwrap().is_some());
        assert!(repo.find_by_email("kim@x.com").await.unwrap().is_some());
        assert!(repo.exists_by_display_name("Kim").await.unwrap());
        assert!(!repo.exists_by_display_name("kim").await.unwrap());
    }

    #[actix_web::test]
    async fn test_find_by_malformed_id_is_absent() {
        let repo = InMemoryUserRepository::new();

        assert!(repo.find_by_id("not-an-object-id").await.unwrap().is_none());
        assert!(repo.find_by_id(&ObjectId::new().to_hex()).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_save_rejects_each_duplicate_identity() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("kim01", "Kim", "kim@x.com")).await.unwrap();

        let cases = [
            (user("kim01", "Other", "other@x.com"), DUPLICATE_LOGIN_ID_MESSAGE),
            (user("lee02", "Lee", "kim@x.com"), DUPLICATE_EMAIL_MESSAGE),
            (user("park03", "Kim", "park@x.com"), DUPLICATE_DISPLAY_NAME_MESSAGE),
        ];

        for (candidate, expected) in cases {
            match repo.save(candidate).await {
                Err(AppError::DuplicateIdentity(msg)) => assert_eq!(msg, expected),
                other => panic!("Expected DuplicateIdentity, got {:?}", other),
            }
        }
    }

    #[actix_web::test]
    async fn test_update_increments_version() {
        let repo = InMemoryUserRepository::new();
        let mut saved = repo.save(user("kim01", "Kim", "kim@x.com")).await.unwrap();

        saved.update_display_name("Lee".to_string());
        let updated = repo.update(&saved).await.unwrap();

        assert_eq!(updated.version, 1);
        assert_eq!(updated.display_name, "Lee");
        assert!(repo.exists_by_display_name("Lee").await.unwrap());
        assert!(!repo.exists_by_display_name("Kim").await.unwrap());
    }

    #[actix_web::test]
    async fn test_update_with_stale_version_is_rejected() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(user("kim01", "Kim", "kim@x.com")).await.unwrap();

        let mut first = saved.clone();
        first.update_display_name("Lee".to_string());
        repo.update(&first).await.unwrap();

        let mut second = saved;
        second.update_display_name("Park".to_string());

        match repo.update(&second).await {
            Err(AppError::StaleVersion(msg)) => assert_eq!(msg, STALE_VERSION_MESSAGE),
            other => panic!("Expected StaleVersion, got {:?}", other),
        }
        assert_eq!(repo.find_by_login_id("kim01").await.unwrap().unwrap().display_name, "Lee");
    }

    #[actix_web::test]
    async fn test_update_to_taken_display_name_is_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("kim01", "Kim", "kim@x.com")).await.unwrap();
        let mut lee = repo.save(user("lee02", "Lee", "lee@x.com")).await.unwrap();

        lee.update_display_name("Kim".to_string());

        match repo.update(&lee).await {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, DUPLICATE_DISPLAY_NAME_MESSAGE),
            other => panic!("Expected Conflict, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let mut ghost = user("ghost", "Ghost", "ghost@x.com");

        assert!(matches!(repo.update(&ghost).await, Err(AppError::NotFound(_))));

        ghost.id = Some(ObjectId::new());
        assert!(matches!(repo.update(&ghost).await, Err(AppError::NotFound(_))));
    }
}

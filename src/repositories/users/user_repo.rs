//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 사용하는 [`UserStore`] 구현체입니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: `login_id`, `email`, `display_name` 유니크 인덱스가 최종 판정자
//! - **낙관적 동시성**: `{ _id, version }` 필터와 `$inc`로 원자적 갱신
//! - **에러 매핑**: 중복 키(11000) 에러를 도메인 에러로 변환

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info, warn};
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::AppError,
};
use super::user_store::{
    UserStore, DUPLICATE_DISPLAY_NAME_MESSAGE, DUPLICATE_EMAIL_MESSAGE,
    DUPLICATE_LOGIN_ID_MESSAGE, STALE_VERSION_MESSAGE, USER_NOT_FOUND_MESSAGE,
};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

const LOGIN_ID_INDEX: &str = "login_id_unique";
const EMAIL_INDEX: &str = "email_unique";
const DISPLAY_NAME_INDEX: &str = "display_name_unique";
const CREATED_AT_INDEX: &str = "created_at_desc";

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장 구조
///
/// - **컬렉션명**: `users`
/// - **인덱스**: login_id(unique), email(unique), display_name(unique), created_at(desc)
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **DuplicateIdentity**: 저장 시 유니크 인덱스 위반
/// - **Conflict**: 갱신 시 닉네임 유니크 위반
/// - **StaleVersion**: 갱신 시 `version` 불일치
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Arc::new(Database::new().await?);
/// let repo = UserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let saved = repo.save(User::new(login_id, hash, nickname, email)).await?;
/// ```
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION_NAME)
    }

    async fn find_one_by(&self, field: &str, value: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { field: value })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. `login_id` 유니크 인덱스
    /// 2. `email` 유니크 인덱스
    /// 3. `display_name` 유니크 인덱스
    /// 4. `created_at` 내림차순 인덱스
    ///
    /// # 주의사항
    ///
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let unique_index = |field: &str, name: &str| {
            IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(IndexOptions::builder()
                    .unique(true)
                    .name(name.to_string())
                    .build())
                .build()
        };

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name(CREATED_AT_INDEX.to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([
                unique_index("login_id", LOGIN_ID_INDEX),
                unique_index("email", EMAIL_INDEX),
                unique_index("display_name", DISPLAY_NAME_INDEX),
                created_at_index,
            ])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ users 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

/// 중복 키 에러라면 위반된 인덱스 이름이 포함된 메시지를 돌려줍니다.
fn duplicate_key_message(error: &mongodb::error::Error) -> Option<&str> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE => Some(write_error.message.as_str()),
        _ => None,
    }
}

/// 위반된 인덱스에 맞는 중복 안내 메시지
fn duplicate_field_message(server_message: &str) -> &'static str {
    if server_message.contains(LOGIN_ID_INDEX) {
        DUPLICATE_LOGIN_ID_MESSAGE
    } else if server_message.contains(EMAIL_INDEX) {
        DUPLICATE_EMAIL_MESSAGE
    } else {
        DUPLICATE_DISPLAY_NAME_MESSAGE
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("유효하지 않은 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, AppError> {
        self.find_one_by("login_id", login_id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.find_one_by("email", email).await
    }

    async fn find_by_display_name(&self, display_name: &str) -> Result<Option<User>, AppError> {
        self.find_one_by("display_name", display_name).await
    }

    async fn exists_by_display_name(&self, display_name: &str) -> Result<bool, AppError> {
        let count = self.collection()
            .count_documents(doc! { "display_name": display_name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, mut user: User) -> Result<User, AppError> {
        user.id = None;
        user.version = 0;

        let result = match self.collection().insert_one(&user).await {
            Ok(result) => result,
            Err(e) => {
                if let Some(message) = duplicate_key_message(&e) {
                    warn!("사용자 저장 중 중복 키 위반: {}", message);
                    return Err(AppError::DuplicateIdentity(duplicate_field_message(message).to_string()));
                }
                return Err(AppError::DatabaseError(e.to_string()));
            }
        };

        match result.inserted_id {
            Bson::ObjectId(id) => user.id = Some(id),
            other => {
                return Err(AppError::DatabaseError(format!("예상하지 못한 ID 타입: {}", other)));
            }
        }

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let object_id = user.id
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        let updated_at = DateTime::now();

        let result = self.collection()
            .update_one(
                doc! { "_id": object_id, "version": user.version },
                doc! {
                    "$set": {
                        "display_name": user.display_name.as_str(),
                        "password_hash": user.password_hash.as_str(),
                        "profile_image": user.profile_image.clone(),
                        "updated_at": updated_at,
                    },
                    "$inc": { "version": 1_i64 },
                },
            )
            .await;

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                if let Some(message) = duplicate_key_message(&e) {
                    warn!("사용자 갱신 중 중복 키 위반: {}", message);
                    return Err(AppError::Conflict(DUPLICATE_DISPLAY_NAME_MESSAGE.to_string()));
                }
                return Err(AppError::DatabaseError(e.to_string()));
            }
        };

        if result.matched_count == 0 {
            // 문서가 없거나 다른 요청이 먼저 버전을 올린 경우
            let exists = self.collection()
                .count_documents(doc! { "_id": object_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            return if exists == 0 {
                Err(AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
            } else {
                warn!("버전 불일치로 사용자 갱신 거부: id={}, version={}", object_id, user.version);
                Err(AppError::StaleVersion(STALE_VERSION_MESSAGE.to_string()))
            };
        }

        let mut updated = user.clone();
        updated.version += 1;
        updated.updated_at = updated_at;
        Ok(updated)
    }
}

//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로그인 아이디/비밀번호 기반 계정 하나를 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 유일한 영속 엔티티입니다.
/// `login_id`, `email`, `display_name`은 저장소 수준에서 유니크하며,
/// `id`는 저장 시점에 한 번 할당된 뒤 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 아이디 (unique, 생성 후 변경 불가)
    pub login_id: String,
    /// bcrypt 해시된 비밀번호 (평문은 저장하지 않음)
    pub password_hash: String,
    /// 닉네임 (unique)
    pub display_name: String,
    /// 이메일 (unique)
    pub email: String,
    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// 낙관적 동시성 제어용 버전
    #[serde(default)]
    pub version: i64,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 프로필 이미지 없이 생성되며, `id`는 저장소가 할당합니다.
    pub fn new(login_id: String, password_hash: String, display_name: String, email: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            login_id,
            password_hash,
            display_name,
            email,
            profile_image: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 닉네임 변경
    pub fn update_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
        self.touch();
    }

    /// 비밀번호 해시 교체
    pub fn update_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    /// 프로필 이미지 변경
    pub fn update_profile_image(&mut self, profile_image: String) {
        self.profile_image = Some(profile_image);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "kim01".to_string(),
            "$2b$04$hash".to_string(),
            "Kim".to_string(),
            "kim@x.com".to_string(),
        )
    }

    #[test]
    fn test_new_user_has_no_id_and_no_profile_image() {
        let user = sample_user();

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert!(user.profile_image.is_none());
        assert_eq!(user.version, 0);
    }

    #[test]
    fn test_mutators_change_only_their_field() {
        let mut user = sample_user();

        user.update_display_name("Lee".to_string());
        user.update_profile_image("http://img/a.png".to_string());

        assert_eq!(user.display_name, "Lee");
        assert_eq!(user.profile_image.as_deref(), Some("http://img/a.png"));
        assert_eq!(user.login_id, "kim01");
        assert_eq!(user.email, "kim@x.com");
        assert_eq!(user.password_hash, "$2b$04$hash");
    }

    #[test]
    fn test_profile_image_absent_is_not_serialized() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("profile_image").is_none());
        assert!(json.get("_id").is_none());
    }
}

use serde::{Deserialize, Serialize};
use crate::{domain::entities::users::user::User, errors::AppError};

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub id: String,
    pub login_id: String,
    pub display_name: String,
}

/// 로그인 응답 DTO (액세스 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub display_name: String,
    pub id: String,
    pub access_token: String,
}

/// 마이페이지(프로필) 응답 DTO
///
/// 비밀번호 해시와 이메일은 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyPageResponse {
    pub id: String,
    pub login_id: String,
    pub display_name: String,
    pub profile_image: Option<String>,
}

impl TryFrom<User> for MyPageResponse {
    type Error = AppError;

    /// 저장되지 않아 ID가 없는 사용자는 `InternalError`로 거부합니다.
    fn try_from(user: User) -> Result<Self, Self::Error> {
        let id = user.id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;
        let User {
            login_id,
            display_name,
            profile_image,
            ..
        } = user;

        Ok(Self {
            id,
            login_id,
            display_name,
            profile_image,
        })
    }
}

/// 닉네임 사용 가능 여부 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicknameAvailabilityResponse {
    pub nickname: String,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;
    use super::*;

    fn user() -> User {
        User::new(
            "kim01".to_string(),
            "$2b$04$hash".to_string(),
            "Kim".to_string(),
            "kim@x.com".to_string(),
        )
    }

    #[test]
    fn test_my_page_requires_saved_user() {
        assert!(matches!(MyPageResponse::try_from(user()), Err(AppError::InternalError(_))));

        let mut saved = user();
        let id = ObjectId::new();
        saved.id = Some(id);

        let page = MyPageResponse::try_from(saved).unwrap();
        assert_eq!(page.id, id.to_hex());
        assert_eq!(page.login_id, "kim01");
        assert!(page.profile_image.is_none());
    }
}

//! 회원가입 요청 DTO
//!
//! 새로운 계정 생성을 위한 요청 데이터 구조를 정의합니다.
//! 형식 검증은 어댑터 계층에서 `validate()`로 수행하며,
//! 중복 검사 등 비즈니스 규칙은 `UserService::signup`이 담당합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 계정 생성을 위한 요청 DTO
///
/// 비밀번호 길이는 여기서 검증하지 않습니다.
/// 최소 길이 정책은 비밀번호 변경 시에만 적용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// 로그인 아이디
    #[validate(length(min = 1, message = "아이디는 비어있을 수 없습니다."))]
    pub login_id: String,

    /// 계정 비밀번호 (평문, 해싱 후 폐기)
    #[validate(length(min = 1, message = "비밀번호는 비어있을 수 없습니다."))]
    pub password: String,

    /// 닉네임
    #[validate(length(min = 1, message = "닉네임은 비어있을 수 없습니다."))]
    pub display_name: String,

    /// 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요."))]
    pub email: String,

    /// 프로필 이미지 URL (선택)
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(login_id: &str, email: &str) -> SignupRequest {
        SignupRequest {
            login_id: login_id.to_string(),
            password: "short".to_string(),
            display_name: "Kim".to_string(),
            email: email.to_string(),
            profile_image: None,
        }
    }

    #[test]
    fn test_short_password_passes_request_validation() {
        assert!(request("kim01", "kim@x.com").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_and_empty_login_id_are_rejected() {
        assert!(request("kim01", "not-an-email").validate().is_err());
        assert!(request("", "kim@x.com").validate().is_err());
    }

    #[test]
    fn test_every_required_field_rejects_empty_value() {
        let mut empty_display_name = request("kim01", "kim@x.com");
        empty_display_name.display_name = String::new();
        assert!(empty_display_name.validate().is_err());

        let mut empty_password = request("kim01", "kim@x.com");
        empty_password.password = String::new();
        assert!(empty_password.validate().is_err());

        assert!(request("", "kim@x.com").validate().is_err());
        assert!(request("kim01", "").validate().is_err());
    }

    #[test]
    fn test_profile_image_is_optional_in_json() {
        let json = r#"{
            "login_id": "kim01",
            "password": "p@ssword1",
            "display_name": "Kim",
            "email": "kim@x.com"
        }"#;

        let parsed: SignupRequest = serde_json::from_str(json).unwrap();
        assert!(parsed.profile_image.is_none());
    }
}

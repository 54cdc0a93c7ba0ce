//! 로그인 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 아이디/비밀번호 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "아이디는 비어있을 수 없습니다."))]
    pub login_id: String,

    pub password: String,
}

//! 계정 정보 변경 요청 DTO
//!
//! 닉네임, 비밀번호, 프로필 이미지 변경 요청을 정의합니다.
//! 공백/누락 검사는 서비스 계층에서 수행하므로 필드는 그대로 받습니다.
use serde::{Deserialize, Serialize};

/// 닉네임 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicknameRequest {
    /// 새 닉네임 (누락 시 `InvalidInput`)
    #[serde(default)]
    pub new_nickname: Option<String>,
}

/// 비밀번호 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChangeRequest {
    /// 현재 비밀번호
    pub current_password: String,
    /// 새 비밀번호
    pub new_password: String,
    /// 새 비밀번호 확인
    pub confirm_password: String,
}

/// 프로필 이미지 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileImageRequest {
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// 닉네임 사용 가능 여부 조회 쿼리
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicknameCheckQuery {
    pub nickname: String,
}

//! # 문자열 유틸리티
//!
//! 입력값의 공백 여부를 판단하는 공통 함수들입니다.
//! 공백 판단에만 trim을 사용하고, 통과한 값은 원본 그대로 돌려줍니다.

use crate::errors::AppError;

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 문자열에서 공백이 아닌 값만 남깁니다.
///
/// # 반환값
/// * `None` - 값이 없거나 빈 문자열/공백뿐인 경우
/// * `Some(&str)` - 원본 문자열 (trim하지 않음)
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| is_valid_string(s))
}

/// 필수 문자열 필드 검증
///
/// 값이 없거나 공백뿐이면 `InvalidInput`을, 그렇지 않으면 원본 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// let nickname = require_non_blank(request.new_nickname.as_deref(), "닉네임은 비어있을 수 없습니다.")?;
/// ```
pub fn require_non_blank<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    non_blank(value).ok_or_else(|| AppError::InvalidInput(message.to_string()))
}

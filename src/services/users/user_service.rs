//! # 사용자 계정 서비스 구현
//!
//! 계정 식별자와 자격 증명에 관한 모든 비즈니스 규칙을 담당합니다.
//! 사용자 엔티티를 생성하거나 변경할 수 있는 유일한 계층입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UserService                          │
//! │                                                             │
//! │  signup / login / is_nickname_available                     │
//! │  update_nickname / update_password / update_profile_image   │
//! │  get_my_page                                                │
//! └──────────────┬──────────────────┬───────────────┬───────────┘
//!                ▼                  ▼               ▼
//!        dyn UserStore     dyn PasswordHasher  dyn TokenIssuer
//! ```
//!
//! ## 검증 순서
//!
//! 각 연산은 아래 순서대로 검사하며 첫 번째 실패를 그대로 반환합니다.
//!
//! | 연산 | 순서 |
//! |------|------|
//! | `signup` | 이메일 중복 → 아이디 중복 → (저장소) 닉네임 중복 |
//! | `login` | 사용자 없음 → 비밀번호 불일치 |
//! | `update_nickname` | 사용자 없음 → 공백 → 사용 중 |
//! | `update_password` | 사용자 없음 → 현재 비밀번호 → 확인 불일치 → 길이 정책 |
//! | `update_profile_image` | 사용자 없음 → 공백 |
//!
//! ## 동시성
//!
//! 서비스는 상태를 갖지 않습니다. 변경 연산은 읽은 시점의 `version`으로
//! [`UserStore::update`]를 호출합니다. 사전 검사와 쓰기 사이에 다른 요청이
//! 같은 사용자를 먼저 갱신하면 저장소가 `StaleVersion`을 돌려주고, 서비스는
//! 사용자를 다시 읽어 검증부터 최대 [`MAX_UPDATE_ATTEMPTS`]번까지 재시도합니다.
//! 따라서 서로 다른 필드를 바꾸는 동시 요청은 모두 성공하고, 같은 닉네임을
//! 노리는 요청은 재검증 또는 저장소의 유니크 제약에서 한쪽만 통과합니다.

use std::sync::Arc;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::{
            request::{LoginRequest, NicknameRequest, PasswordChangeRequest, SignupRequest},
            response::{LoginResponse, MyPageResponse, SignupResponse},
        },
    },
    errors::AppError,
    repositories::users::UserStore,
    services::auth::{PasswordHasher, TokenIssuer},
    utils::string_utils::{non_blank, require_non_blank},
};

/// 비밀번호 변경 시 요구되는 최소 길이 (문자 수)
///
/// 가입 시에는 적용하지 않습니다.
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// 버전 충돌 시 읽기-검증-쓰기를 반복하는 최대 횟수
pub const MAX_UPDATE_ATTEMPTS: usize = 3;

const USER_NOT_FOUND: &str = "존재하지 않는 사용자입니다.";

/// 사용자 계정 서비스
///
/// 모든 협력 객체는 생성자로 주입됩니다.
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(BcryptPasswordHasher::new(4)),
///     Arc::new(TokenService::new("secret", 24)),
/// );
///
/// let signed_up = service.signup(request).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    user_store: Arc<dyn UserStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl UserService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            token_issuer,
        }
    }

    async fn find_user(&self, user_id: &str) -> Result<User, AppError> {
        self.user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// 회원가입
    ///
    /// 비밀번호 길이 정책은 적용하지 않습니다. 프로필 이미지는 공백이 아닐 때만
    /// 입력값 그대로 저장됩니다.
    ///
    /// # Errors
    ///
    /// * `DuplicateIdentity` - 이메일, 아이디 또는 닉네임이 이미 존재
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupResponse, AppError> {
        if self.user_store.find_by_email(&request.email).await?.is_some() {
            log::warn!("회원가입 거부 (이메일 중복): {}", request.email);
            return Err(AppError::DuplicateIdentity("이미 존재하는 이메일입니다.".to_string()));
        }

        if self.user_store.find_by_login_id(&request.login_id).await?.is_some() {
            log::warn!("회원가입 거부 (아이디 중복): {}", request.login_id);
            return Err(AppError::DuplicateIdentity("이미 존재하는 사용자 ID입니다.".to_string()));
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let mut user = User::new(
            request.login_id,
            password_hash,
            request.display_name,
            request.email,
        );

        if let Some(profile_image) = non_blank(request.profile_image.as_deref()) {
            user.update_profile_image(profile_image.to_string());
        }

        let saved = self.user_store.save(user).await?;
        let id = saved.id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        log::info!("회원가입 완료: {} ({})", saved.login_id, id);

        Ok(SignupResponse {
            id,
            login_id: saved.login_id,
            display_name: saved.display_name,
        })
    }

    /// 로그인
    ///
    /// 저장된 상태를 변경하지 않고 액세스 토큰만 발급합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 아이디의 사용자가 없음
    /// * `InvalidCredential` - 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self.user_store
            .find_by_login_id(&request.login_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        if !self.password_hasher.verify(&request.password, &user.password_hash)? {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", request.login_id);
            return Err(AppError::InvalidCredential("비밀번호가 일치하지 않습니다.".to_string()));
        }

        let access_token = self.token_issuer.issue(&user.login_id)?;
        let id = user.id_string()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        log::info!("로그인 성공: {}", user.login_id);

        Ok(LoginResponse {
            display_name: user.display_name,
            id,
            access_token,
        })
    }

    /// 닉네임 사용 가능 여부 (대소문자, 공백을 구분하는 정확한 일치)
    pub async fn is_nickname_available(&self, nickname: &str) -> Result<bool, AppError> {
        Ok(!self.user_store.exists_by_display_name(nickname).await?)
    }

    /// 닉네임 변경
    ///
    /// 현재 자신의 닉네임과 같은 값으로 변경하는 요청도 사용 중으로 처리됩니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 사용자 없음
    /// * `InvalidInput` - 닉네임이 없거나 공백
    /// * `Conflict` - 이미 사용 중인 닉네임 (동시 변경 경합 포함)
    pub async fn update_nickname(&self, user_id: &str, request: NicknameRequest) -> Result<(), AppError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut user = self.find_user(user_id).await?;

            let new_nickname = require_non_blank(
                request.new_nickname.as_deref(),
                "닉네임은 비어있을 수 없습니다.",
            )?;

            if !self.is_nickname_available(new_nickname).await? {
                return Err(AppError::Conflict("이미 사용 중인 닉네임입니다.".to_string()));
            }

            user.update_display_name(new_nickname.to_string());
            if let Some(result) = settle_update(self.user_store.update(&user).await, attempt) {
                result?;
                log::info!("닉네임 변경 완료: {} -> {}", user.login_id, new_nickname);
                return Ok(());
            }
        }
    }

    /// 비밀번호 변경
    ///
    /// # Errors
    ///
    /// * `NotFound` - 사용자 없음
    /// * `InvalidCredential` - 현재 비밀번호 불일치
    /// * `Mismatch` - 새 비밀번호와 확인 비밀번호 불일치
    /// * `PolicyViolation` - 새 비밀번호가 [`MIN_PASSWORD_LENGTH`]자 미만
    pub async fn update_password(&self, user_id: &str, request: PasswordChangeRequest) -> Result<(), AppError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut user = self.find_user(user_id).await?;

            if !self.password_hasher.verify(&request.current_password, &user.password_hash)? {
                log::warn!("비밀번호 변경 실패 (현재 비밀번호 불일치): {}", user.login_id);
                return Err(AppError::InvalidCredential("현재 비밀번호가 일치하지 않습니다.".to_string()));
            }

            if request.new_password != request.confirm_password {
                return Err(AppError::Mismatch("새 비밀번호와 확인 비밀번호가 일치하지 않습니다.".to_string()));
            }

            validate_password(&request.new_password)?;

            let password_hash = self.password_hasher.hash(&request.new_password)?;
            user.update_password_hash(password_hash);
            if let Some(result) = settle_update(self.user_store.update(&user).await, attempt) {
                result?;
                log::info!("비밀번호 변경 완료: {}", user.login_id);
                return Ok(());
            }
        }
    }

    /// 프로필 이미지 변경
    ///
    /// # Errors
    ///
    /// * `NotFound` - 사용자 없음
    /// * `InvalidInput` - 값이 없거나 공백
    pub async fn update_profile_image(&self, user_id: &str, profile_image: Option<String>) -> Result<(), AppError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let mut user = self.find_user(user_id).await?;

            let image = require_non_blank(
                profile_image.as_deref(),
                "프로필 사진 URL은 비어있을 수 없습니다.",
            )?;

            user.update_profile_image(image.to_string());
            if let Some(result) = settle_update(self.user_store.update(&user).await, attempt) {
                result?;
                log::info!("프로필 이미지 변경 완료: {}", user.login_id);
                return Ok(());
            }
        }
    }

    /// 마이페이지 조회
    pub async fn get_my_page(&self, user_id: &str) -> Result<MyPageResponse, AppError> {
        let user = self.find_user(user_id).await?;
        MyPageResponse::try_from(user)
    }
}

/// 갱신 결과를 확정합니다.
///
/// 버전 충돌이고 재시도 여유가 남아 있으면 `None`을 돌려 호출자가 다시 읽게 합니다.
fn settle_update(result: Result<User, AppError>, attempt: usize) -> Option<Result<User, AppError>> {
    match result {
        Err(AppError::StaleVersion(msg)) if attempt < MAX_UPDATE_ATTEMPTS => {
            log::debug!("버전 충돌로 재시도 ({}/{}): {}", attempt, MAX_UPDATE_ATTEMPTS, msg);
            None
        }
        other => Some(other),
    }
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::PolicyViolation(format!(
            "비밀번호는 {}자 이상이어야 합니다.",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

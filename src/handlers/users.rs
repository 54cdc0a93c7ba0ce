//! # User Account HTTP Handlers
//!
//! 계정 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청 검증과 응답 포장만 담당하고, 규칙은 모두 [`UserService`]에 있습니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users/signup` | 회원가입 | 201 Created |
//! | `POST` | `/api/users/login` | 로그인 | 200 OK |
//! | `GET` | `/api/users/nickname/check?nickname=` | 닉네임 사용 가능 여부 | 200 OK |
//! | `PATCH` | `/api/users/{user_id}/nickname` | 닉네임 변경 | 200 OK |
//! | `PATCH` | `/api/users/{user_id}/password` | 비밀번호 변경 | 200 OK |
//! | `PATCH` | `/api/users/{user_id}/profile-image` | 프로필 이미지 변경 | 200 OK |
//! | `GET` | `/api/users/{user_id}/mypage` | 마이페이지 조회 | 200 OK |
//!
//! ## 응답 형식
//!
//! 성공과 실패 모두 [`ApiResponse`] 봉투로 응답합니다.
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "이미 사용 중인 닉네임입니다.",
//!   "data": null,
//!   "timestamp": "2026-01-01T12:00:00Z"
//! }
//! ```

use actix_web::{get, patch, post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::{
        api_response::ApiResponse,
        users::{
            request::{
                LoginRequest, NicknameCheckQuery, NicknameRequest, PasswordChangeRequest,
                ProfileImageRequest, SignupRequest,
            },
            response::NicknameAvailabilityResponse,
        },
    },
    errors::AppError,
    services::users::UserService,
};

/// 회원가입 핸들러
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users/signup \
///   -H "Content-Type: application/json" \
///   -d '{
///     "login_id": "kim01",
///     "password": "p@ssword1",
///     "display_name": "Kim",
///     "email": "kim@x.com"
///   }'
/// ```
#[post("/signup")]
pub async fn signup(
    service: web::Data<UserService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let response = service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_message("회원가입이 완료되었습니다.", response)))
}

/// 로그인 핸들러
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message("로그인 성공", response)))
}

#[get("/nickname/check")]
pub async fn check_nickname(
    service: web::Data<UserService>,
    query: web::Query<NicknameCheckQuery>,
) -> Result<HttpResponse, AppError> {
    let NicknameCheckQuery { nickname } = query.into_inner();
    let available = service.is_nickname_available(&nickname).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(NicknameAvailabilityResponse {
        nickname,
        available,
    })))
}

#[patch("/{user_id}/nickname")]
pub async fn update_nickname(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<NicknameRequest>,
) -> Result<HttpResponse, AppError> {
    service.update_nickname(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message("닉네임이 변경되었습니다.", ())))
}

#[patch("/{user_id}/password")]
pub async fn update_password(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<PasswordChangeRequest>,
) -> Result<HttpResponse, AppError> {
    service.update_password(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message("비밀번호가 변경되었습니다.", ())))
}

#[patch("/{user_id}/profile-image")]
pub async fn update_profile_image(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<ProfileImageRequest>,
) -> Result<HttpResponse, AppError> {
    service.update_profile_image(&user_id, payload.into_inner().profile_image).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message("프로필 사진이 변경되었습니다.", ())))
}

/// 마이페이지 조회 핸들러
///
/// 비밀번호 해시와 이메일은 응답에 포함되지 않습니다.
#[get("/{user_id}/mypage")]
pub async fn get_my_page(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = service.get_my_page(&user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use crate::{
        repositories::users::InMemoryUserRepository,
        routes::configure_all_routes,
        services::auth::{BcryptPasswordHasher, TokenService},
    };
    use super::*;

    fn user_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(BcryptPasswordHasher::new(4)),
            Arc::new(TokenService::new("test-secret", 1)),
        ))
    }

    fn kim_signup() -> Value {
        json!({
            "login_id": "kim01",
            "password": "p@ssword1",
            "display_name": "Kim",
            "email": "kim@x.com"
        })
    }

    #[actix_web::test]
    async fn test_signup_login_and_mypage() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/users/signup")
            .set_json(kim_signup())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["login_id"], "kim01");
        let user_id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "login_id": "kim01", "password": "p@ssword1" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["id"], user_id.as_str());
        assert!(!body["data"]["access_token"].as_str().unwrap().is_empty());

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}/mypage", user_id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["display_name"], "Kim");
        assert!(body["data"]["profile_image"].is_null());
        assert!(body["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_error_statuses_use_envelope() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/users/signup")
            .set_json(kim_signup())
            .to_request();
        test::call_service(&app, req).await;

        // 중복 가입
        let req = test::TestRequest::post()
            .uri("/api/users/signup")
            .set_json(kim_signup())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "이미 존재하는 이메일입니다.");

        // 잘못된 비밀번호
        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({ "login_id": "kim01", "password": "wrong" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        // 존재하지 않는 사용자
        let req = test::TestRequest::get()
            .uri("/api/users/0123456789abcdef01234567/mypage")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        // 이메일 형식 오류
        let req = test::TestRequest::post()
            .uri("/api/users/signup")
            .set_json(json!({
                "login_id": "lee02",
                "password": "p@ssword1",
                "display_name": "Lee",
                "email": "not-an-email"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_account_updates() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/users/signup")
            .set_json(kim_signup())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let user_id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/users/nickname/check?nickname=Kim")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["available"], false);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}/nickname", user_id))
            .set_json(json!({ "new_nickname": "Park" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}/nickname", user_id))
            .set_json(json!({ "new_nickname": "  " }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}/password", user_id))
            .set_json(json!({
                "current_password": "p@ssword1",
                "new_password": "123456789",
                "confirm_password": "123456789"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "비밀번호는 10자 이상이어야 합니다.");

        let req = test::TestRequest::patch()
            .uri(&format!("/api/users/{}/profile-image", user_id))
            .set_json(json!({ "profile_image": "http://img/a.png" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}/mypage", user_id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["display_name"], "Park");
        assert_eq!(body["data"]["profile_image"], "http://img/a.png");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request_envelope() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        ).await;

        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}

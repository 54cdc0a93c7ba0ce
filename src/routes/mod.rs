//! API 라우트 설정 모듈
//!
//! 계정 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 요청 본문/쿼리 파싱 실패도 [`AppError::InvalidInput`]으로 변환되어
//! 다른 에러와 같은 응답 봉투를 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(routes::configure_all_routes)
//! ```

use actix_web::{error::{JsonPayloadError, QueryPayloadError}, web, HttpRequest};
use serde_json::json;
use crate::{errors::AppError, handlers};

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 계정 관련 라우트를 설정합니다
///
/// 인증 미들웨어 없이 모두 공개되어 있으며, 경로의 `user_id`는 MongoDB ObjectId 문자열입니다.
///
/// ```bash
/// curl -X PATCH http://localhost:8080/api/users/652f.../nickname \
///   -H "Content-Type: application/json" \
///   -d '{"new_nickname":"Park"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::signup)
            .service(handlers::users::login)
            .service(handlers::users::check_nickname)
            .service(handlers::users::update_nickname)
            .service(handlers::users::update_password)
            .service(handlers::users::update_profile_image)
            .service(handlers::users::get_my_page)
    );
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("요청 본문 파싱 실패: {}", err);
    AppError::InvalidInput(format!("요청 본문이 올바르지 않습니다: {}", err)).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("쿼리 파라미터 파싱 실패: {}", err);
    AppError::InvalidInput(format!("쿼리 파라미터가 올바르지 않습니다: {}", err)).into()
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "pusan_trip_account",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use super::*;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "pusan_trip_account");
    }
}

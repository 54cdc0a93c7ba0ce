//! 부산 여행 플래너 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 조립합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use pusan_trip_account::config::{DatabaseConfig, Environment, ServerConfig, StoreBackend};
use pusan_trip_account::db::Database;
use pusan_trip_account::repositories::users::{InMemoryUserRepository, UserRepository, UserStore};
use pusan_trip_account::routes::configure_all_routes;
use pusan_trip_account::services::auth::{BcryptPasswordHasher, TokenService};
use pusan_trip_account::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 부산 여행 계정 서비스 시작중... (환경: {:?})", Environment::current());

    let user_store = initialize_user_store().await?;

    let password_hasher = BcryptPasswordHasher::from_env();
    info!("🔐 bcrypt cost: {}", password_hasher.cost());

    let user_service = web::Data::new(UserService::new(
        user_store,
        Arc::new(password_hasher),
        Arc::new(TokenService::from_env()),
    ));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// 바인딩 주소는 `HOST`, `PORT` 환경변수로 지정합니다. (기본값: 0.0.0.0:8080)
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/users", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(user_service.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=pusan_trip_account::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `USER_STORE` 설정에 따라 사용자 저장소를 생성합니다
///
/// MongoDB를 사용하는 경우 연결 확인 후 유니크 인덱스를 생성합니다.
/// 연결이나 인덱스 생성에 실패하면 서버를 시작하지 않습니다.
async fn initialize_user_store() -> std::io::Result<Arc<dyn UserStore>> {
    match DatabaseConfig::store_backend() {
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소를 사용합니다. 재시작 시 모든 계정이 사라집니다.");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            let repository = UserRepository::new(Arc::new(database));
            repository.create_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(repository))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 기반으로 구현되었으며, 서비스는 `web::Data<UserService>`로 주입받습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증, 응답 포장            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 규칙                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러는
//! [`AppError`](crate::errors::AppError)의 `ResponseError` 구현이 상태 코드와 본문으로 변환합니다.

pub mod users;

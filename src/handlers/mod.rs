//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 검증, 부분 수정, 에러 분류           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore - MongoDB / 메모리                  ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 추출기 에러 처리
//!
//! 잘못된 JSON 본문, 쿼리 문자열, 경로 파라미터는 actix-web 기본 응답 대신
//! `AppError::BadRequest`로 변환되어 다른 실패와 같은 `ApiError` 형식으로 응답합니다.
//!
//! ```rust,ignore
//! web::scope("/users")
//!     .app_data(handlers::json_config())
//!     .app_data(handlers::query_config())
//!     .app_data(handlers::path_config())
//!     .service(handlers::users::create_user)
//! ```

use actix_web::web;
use crate::core::errors::AppError;

pub mod users;

/// JSON 본문 파싱 실패를 `AppError::BadRequest`로 변환하는 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("잘못된 JSON 요청 본문: {}", err);
        AppError::BadRequest(err.to_string()).into()
    })
}

/// 쿼리 문자열 파싱 실패를 `AppError::BadRequest`로 변환하는 설정
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("잘못된 쿼리 문자열: {}", err);
        AppError::BadRequest(err.to_string()).into()
    })
}

/// 경로 파라미터(숫자 식별자) 파싱 실패를 `AppError::BadRequest`로 변환하는 설정
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    })
}

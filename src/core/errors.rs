//! # Application Error Handling System
//!
//! 사용자 레지스트리 서비스의 통합 에러 처리 시스템입니다.
//! 도메인 계층에서 발생한 실패를 [`AppError`]로 표현하고,
//! `actix_web::ResponseError` 구현을 통해 일관된 [`ApiError`] JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | code | errors |
//! |----------|-------------|------|--------|
//! | `NotFound` | 404 Not Found | 404 | `[message]` |
//! | `AgeRejected` | 400 Bad Request | 403 | `[message]` |
//! | `ValidationFailed` | 400 Bad Request | 400 | 위반 규칙마다 하나 |
//! | `BadRequest` | 400 Bad Request | 400 | `[message]` |
//! | `InvalidDateRange` | 400 Bad Request | - | (빈 본문) |
//! | `DatabaseError` | 500 Internal Server Error | 500 | `["Internal server error"]` |
//! | `InternalError` | 500 Internal Server Error | 500 | `["Internal server error"]` |
//!
//! 5xx 계열 에러의 원인은 서버 로그에만 기록되며, 클라이언트 응답에는
//! 일반 마커만 포함됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_user(&self, id: i64) -> AppResult<User> {
//!     self.store
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("User not found with ID: {}", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;
use crate::domain::dto::api_error::ApiError;

/// 클라이언트에게 노출되는 내부 오류 마커
pub const INTERNAL_ERROR_MARKER: &str = "Internal server error";

/// 나이 제한 위반 응답에 사용되는 도메인 코드
pub const AGE_REJECTED_CODE: u16 = 403;

/// 애플리케이션 전역 에러 타입
///
/// 사용자 CRUD 흐름에서 발생할 수 있는 모든 실패를 포괄합니다.
///
/// ### 1. 클라이언트 입력 에러 (4xx)
/// - `NotFound`: 식별자에 해당하는 사용자가 없음
/// - `AgeRejected`: 생년월일이 최소 나이 정책을 만족하지 못함
/// - `ValidationFailed`: 구조적 검증 실패 (수집된 모든 위반 메시지 포함)
/// - `BadRequest`: 수정 불가능한 필드, 잘못된 JSON/쿼리 형식
/// - `InvalidDateRange`: 검색 구간의 시작일이 종료일보다 늦음
///
/// ### 2. 시스템 에러 (5xx)
/// - `DatabaseError`: 저장소 연산 실패
/// - `InternalError`: 예상하지 못한 내부 오류
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 리소스를 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 최소 나이 미달 (400, code 403)
    #[error("Age not allowed: {0}")]
    AgeRejected(String),

    /// 입력값 검증 실패 (400)
    ///
    /// 모든 규칙을 독립적으로 평가한 결과이므로 위반 메시지가 여러 개일 수 있습니다.
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// 잘못된 요청 (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 검색 구간 오류 (400, 빈 본문)
    #[error("Invalid date range: fromDate must not be after toDate")]
    InvalidDateRange,

    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문에 기록되는 도메인 코드
    ///
    /// 나이 제한 위반만 HTTP 상태(400)와 다른 코드(403)를 사용합니다.
    pub fn code(&self) -> u16 {
        match self {
            AppError::AgeRejected(_) => AGE_REJECTED_CODE,
            _ => self.status_code().as_u16(),
        }
    }

    /// 클라이언트에게 보여줄 수 없는 내부 오류인지 여부
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_))
    }

    /// 에러를 API 응답 본문으로 변환합니다.
    ///
    /// `InvalidDateRange`는 본문 없이 응답하므로 `None`을 반환합니다.
    pub fn to_api_error(&self) -> Option<ApiError> {
        let status = self.status_code().as_u16();
        let api_error = ApiError::new(status, self.code());

        let api_error = match self {
            AppError::NotFound(message) | AppError::AgeRejected(message) => api_error
                .with_errors(vec![message.clone()])
                .with_detail(message.clone()),
            AppError::ValidationFailed(violations) => api_error
                .with_errors(violations.clone())
                .with_detail("Validation failed"),
            AppError::BadRequest(message) => api_error
                .with_errors(vec![message.clone()])
                .with_detail("Malformed request"),
            AppError::InvalidDateRange => return None,
            AppError::DatabaseError(_) | AppError::InternalError(_) => api_error
                .with_errors(vec![INTERNAL_ERROR_MARKER.to_string()])
                .with_detail("Unexpected error while processing the request"),
        };

        Some(api_error)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AgeRejected(_)
            | AppError::ValidationFailed(_)
            | AppError::BadRequest(_)
            | AppError::InvalidDateRange => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 오류는 원인을 로그로 남기고 일반 마커만 응답합니다.
    fn error_response(&self) -> HttpResponse {
        if self.is_internal() {
            error!("❌ 요청 처리 중 내부 오류: {}", self);
        }

        let mut builder = HttpResponse::build(self.status_code());
        match self.to_api_error() {
            Some(api_error) => builder.json(api_error),
            None => builder.finish(),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let cursor = collection.find(filter).await.context("사용자 검색 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! | 역할 | 타입 |
//! |------|------|
//! | HTTP 요청 본문/쿼리 매핑 | [`users::request`] |
//! | HTTP 응답 본문 매핑 | [`users::response`] |
//! | 에러 응답 봉투 | [`api_error::ApiError`] |
//!
//! 엔티티(저장 형식)와 DTO(외부 표현)는 분리되어 있으며,
//! 외부 표현은 camelCase JSON을 사용합니다.

pub mod api_error;
pub mod users;

pub use api_error::ApiError;
pub use users::*;

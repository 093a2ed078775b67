//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드의 생명주기와 관련된 비즈니스 로직을 제공합니다.
//!
//! # Features
//!
//! - 사용자 등록, 조회, 전체 수정, 삭제
//! - 허용된 필드 집합에 대한 원자적 부분 수정 ([`UserPatch`])
//! - 위반 사항을 모두 수집하는 검증 ([`UserValidator`])
//! - 생년월일 구간 검색
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use serde_json::json;
//!
//! let updates = json!({ "firstName": "Updated" }).as_object().cloned().unwrap();
//! let response = user_service.patch_user(1, updates).await?;
//! ```

pub mod user_patch;
pub mod user_service;
pub mod user_validator;

pub use user_patch::{UserField, UserPatch};
pub use user_service::UserService;
pub use user_validator::{UserValidator, Violation, ViolationKind};

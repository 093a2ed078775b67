//! 사용자 레지스트리 서비스 백엔드
//!
//! 사용자 레코드의 생성, 조회, 수정, 부분 수정, 삭제, 생년월일 구간 검색을 제공하는
//! Rust 기반 REST 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 조회, 전체 수정, 삭제
//! - **부분 수정**: 허용된 필드만 변경하며 실패 시 아무것도 저장하지 않음
//! - **검증**: 위반 사항을 모두 수집하고 최소 나이 정책 적용
//! - **일관된 에러 응답**: 모든 실패가 `ApiError` 본문으로 변환
//! - **MongoDB / 메모리 저장소**: `USER_STORE`로 선택
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 부분 수정, 에러 분류
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_registry_backend::core::clock::SystemClock;
//! use user_registry_backend::repositories::users::MemoryUserRepository;
//! use user_registry_backend::routes::configure_all_routes;
//! use user_registry_backend::services::users::{UserService, UserValidator};
//!
//! let user_service = web::Data::new(UserService::new(
//!     Arc::new(MemoryUserRepository::new()),
//!     UserValidator::new(18),
//!     Arc::new(SystemClock),
//! ));
//!
//! let app = App::new()
//!     .app_data(user_service)
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

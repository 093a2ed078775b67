//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소와 시계를 생성자로 전달받으며,
//! `main`에서 한 번 생성되어 `web::Data`로 핸들러에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::services::users::UserService;
//!
//! let user_service = web::Data::new(UserService::new(store, validator, clock));
//! ```

pub mod users;

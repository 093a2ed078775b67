//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! `PROFILE`에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드되고(`main.rs`),
//! 이후 각 설정 구조체가 환경 변수를 읽습니다.
//!
//! | 환경 변수 | 설정 | 기본값 |
//! |-----------|------|--------|
//! | `HOST` / `PORT` | [`ServerConfig`] | `127.0.0.1` / `8080` |
//! | `SERVER_WORKERS` | [`ServerConfig`] | `4` |
//! | `USER_MIN_AGE` | [`UserPolicyConfig`] | `18` |
//! | `USER_STORE` | [`StoreConfig`] | `mongo` |
//! | `ENVIRONMENT` | [`Environment`] | `production` |
//!
//! MongoDB 연결 설정(`MONGODB_URI`, `DATABASE_NAME`)은 [`crate::db`]에서 읽습니다.

pub mod data_config;

pub use data_config::*;

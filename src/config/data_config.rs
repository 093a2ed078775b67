//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버, 저장소, 실행 환경 및 사용자 정책 관련 설정을 관리합니다.
//! 모든 값은 시작 시 한 번 환경 변수에서 읽으며, 이후에는 읽기 전용입니다.

use std::env;
use log::error;
use crate::domain::policies::DEFAULT_MIN_AGE;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 정책 설정
pub struct UserPolicyConfig;

impl UserPolicyConfig {
    /// `USER_MIN_AGE` 환경 변수 (기본값 18)
    pub fn min_age() -> u32 {
        Self::min_age_from(env::var("USER_MIN_AGE").ok().as_deref())
    }

    pub fn min_age_from(value: Option<&str>) -> u32 {
        match value {
            None => DEFAULT_MIN_AGE,
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|e| {
                error!("USER_MIN_AGE 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_MIN_AGE);
                DEFAULT_MIN_AGE
            }),
        }
    }
}

/// 사용자 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// MongoDB 컬렉션
    Mongo,
    /// 프로세스 메모리 (재시작 시 초기화)
    Memory,
}

pub struct StoreConfig;

impl StoreConfig {
    /// `USER_STORE` 환경 변수 (`mongo` | `memory`, 기본값 `mongo`)
    pub fn kind() -> StoreKind {
        Self::kind_from(&env::var("USER_STORE").unwrap_or_default())
    }

    pub fn kind_from(s: &str) -> StoreKind {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreKind::Memory,
            _ => StoreKind::Mongo,
        }
    }
}

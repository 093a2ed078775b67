//! 도메인 정책 모듈

pub mod age_policy;

pub use age_policy::{completed_years, is_of_age, DEFAULT_MIN_AGE};

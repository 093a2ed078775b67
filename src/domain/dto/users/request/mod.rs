//! 사용자 요청 DTO 모듈
//!
//! - [`UserRequest`]: 생성/전체 수정 요청 본문, PATCH 후보 표현
//! - [`BirthDateRangeQuery`]: 생년월일 구간 검색 쿼리

pub mod search_request;
pub mod user_request;

pub use search_request::BirthDateRangeQuery;
pub use user_request::UserRequest;

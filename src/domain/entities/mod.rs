//! 도메인 엔티티 모듈
//!
//! 저장소에 영구 저장되는 도메인 객체들을 정의합니다.

pub mod users;

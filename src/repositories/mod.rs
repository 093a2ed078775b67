//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 구현은 [`users::UserStore`] trait 뒤에 숨겨져 있어
//! 서비스 계층은 MongoDB와 메모리 저장소를 구분하지 않습니다.

pub mod users;

//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 레코드와 그 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 영속되는 사용자 엔티티
//! ├── DTOs          - 요청/응답/에러 봉투
//! └── Policies      - 최소 나이 정책 (순수 함수)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//! - **User**: 저장소가 숫자 식별자를 할당하는 사용자 레코드
//!
//! ### [`dto`] - 데이터 전송 객체
//! - **UserRequest**: 생성/전체 수정 요청, PATCH 후보
//! - **UserResponse**: 사용자 응답
//! - **ApiError**: 모든 에러 응답의 공통 봉투
//!
//! ### [`policies`] - 도메인 정책
//! - **is_of_age**: 기준일을 주입받아 만 나이를 판정

pub mod dto;
pub mod entities;
pub mod policies;

pub use dto::{ApiError, BirthDateRangeQuery, UserRequest, UserResponse};
pub use entities::users::User;

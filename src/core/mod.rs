//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 구성 요소입니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: `ResponseError` 구현으로 `ApiError` JSON 응답 자동 생성
//!
//! ### [`clock`] - 날짜 공급자
//! - **Clock**: 오늘 날짜를 주입 가능한 형태로 제공
//! - **SystemClock / FixedClock**: 운영용 / 테스트용 구현

pub mod clock;
pub mod errors;

pub use clock::*;
pub use errors::*;

//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── user_request.rs      # 생성/전체 수정 본문, PATCH 후보
//! │   └── search_request.rs    # 생년월일 구간 검색 쿼리
//! └── response/
//!     └── user_response.rs     # 사용자 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

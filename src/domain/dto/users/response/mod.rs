//! # 사용자 관련 응답 DTO 모듈
//!
//! 저장된 사용자 엔티티를 클라이언트에게 전달하기 위한 응답 객체입니다.
//! 엔티티의 snake_case 저장 형식과 달리 API 응답은 camelCase를 사용합니다.
//!
//! ```rust,ignore
//! let response = UserResponse::from(user);
//! Ok(HttpResponse::Ok().json(response))
//! ```

pub mod user_response;

pub use user_response::UserResponse;

//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`UserStore`]: 서비스가 의존하는 저장소 인터페이스
//! - [`UserRepository`]: MongoDB 구현체
//! - [`MemoryUserRepository`]: 메모리 구현체
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MemoryUserRepository, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MemoryUserRepository::new());
//! let user = store.find_by_id(1).await?;
//! ```

pub mod memory_repo;
pub mod user_repo;
pub mod user_store;

pub use memory_repo::MemoryUserRepository;
pub use user_repo::UserRepository;
pub use user_store::UserStore;

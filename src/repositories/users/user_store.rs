//! 사용자 저장소 인터페이스
//!
//! 서비스 계층은 구체적인 저장소가 아니라 이 trait에만 의존합니다.
//! 운영 환경에서는 [`UserRepository`](super::user_repo::UserRepository)(MongoDB),
//! 테스트와 로컬 실행에서는 [`MemoryUserRepository`](super::memory_repo::MemoryUserRepository)를 사용합니다.

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자를 저장합니다.
    ///
    /// 식별자가 없으면 새 식별자를 할당하고, 있으면 해당 레코드를 교체합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// `from..=to` 구간에 생년월일이 포함된 사용자 (생년월일, 식별자 순)
    async fn find_by_birth_date_between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<User>>;

    /// 사용자를 삭제합니다. 존재하지 않는 식별자는 에러가 아닙니다.
    ///
    /// 실제로 삭제된 레코드가 있었는지 반환합니다.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

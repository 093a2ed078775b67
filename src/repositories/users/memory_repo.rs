//! 메모리 기반 사용자 저장소
//!
//! 프로세스 메모리에 사용자를 보관하는 [`UserStore`] 구현체입니다.
//! 테스트와 `USER_STORE=memory` 로컬 실행에 사용되며, 재시작 시 데이터가 사라집니다.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use chrono::NaiveDate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use super::user_store::UserStore;

pub struct MemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
    last_id: AtomicI64,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            last_id: AtomicI64::new(0),
        }
    }

    fn poisoned() -> AppError {
        AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string())
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        let id = match user.id {
            Some(id) => {
                // 외부에서 지정된 ID 이후부터 발급되도록 맞춤
                self.last_id.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
        };
        user.id = Some(id);

        let mut users = self.users.write().map_err(|_| Self::poisoned())?;
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_birth_date_between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;

        let mut found: Vec<User> = users
            .values()
            .filter(|user| user.birth_date >= from && user.birth_date <= to)
            .cloned()
            .collect();
        found.sort_by_key(|user| (user.birth_date, user.id));

        Ok(found)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;
        Ok(users.remove(&id).is_some())
    }
}

//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 사용하는 [`UserStore`] 구현체입니다.
//!
//! ## 특징
//!
//! - **숫자 식별자**: `counters` 컬렉션의 `$inc` 원자 연산으로 순차 ID 발급
//! - **날짜 검색**: `birth_date`를 `yyyy-MM-dd` 문자열로 저장하여 범위 질의 지원
//! - **인덱스 관리**: `birth_date` 인덱스를 시작 시 생성

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, IndexOptions, ReplaceOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::Deserialize;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use super::user_store::UserStore;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";

/// `counters` 컬렉션 문서 (`{ _id: "users", seq: <i64> }`)
#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장 형식
///
/// ```json
/// {
///   "_id": 42,
///   "email": "petr@example.com",
///   "first_name": "Petr",
///   "last_name": "Kulinich",
///   "birth_date": "2000-01-01",
///   "address": "123 Main St",
///   "phone_number": "0506667788"
/// }
/// ```
///
/// ## 에러 처리
///
/// 모든 드라이버 오류는 `AppError::DatabaseError`로 변환되며,
/// 클라이언트에게는 500 응답과 일반 마커만 전달됩니다.
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    /// 다음 사용자 식별자 발급
    ///
    /// 카운터 문서가 없으면 upsert로 생성되며 첫 값은 1입니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.db
            .collection::<Counter>(COUNTERS_COLLECTION)
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("사용자 ID 카운터를 읽을 수 없습니다".to_string()))?;

        Ok(counter.seq)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 생년월일 구간 검색을 위한 `birth_date` 오름차순 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let birth_date_index = IndexModel::builder()
            .keys(doc! { "birth_date": 1, "_id": 1 })
            .options(IndexOptions::builder()
                .name("birth_date_asc".to_string())
                .build())
            .build();

        self.users()
            .create_index(birth_date_index)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            None => {
                let id = self.next_id().await?;
                user.id = Some(id);

                self.users()
                    .insert_one(&user)
                    .await?;

                debug!("사용자 문서 생성: _id={}", id);
            }
            Some(id) => {
                let options = ReplaceOptions::builder().upsert(true).build();

                self.users()
                    .replace_one(doc! { "_id": id }, &user)
                    .with_options(options)
                    .await?;

                debug!("사용자 문서 교체: _id={}", id);
            }
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = self.users()
            .find_one(doc! { "_id": id })
            .await?;

        Ok(user)
    }

    async fn find_by_birth_date_between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<User>> {
        let filter = doc! {
            "birth_date": {
                "$gte": from.format("%Y-%m-%d").to_string(),
                "$lte": to.format("%Y-%m-%d").to_string(),
            }
        };

        let users = self.users()
            .find(filter)
            .sort(doc! { "birth_date": 1, "_id": 1 })
            .await?
            .try_collect::<Vec<User>>()
            .await?;

        Ok(users)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self.users()
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

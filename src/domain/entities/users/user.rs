//! User Entity Implementation
//!
//! 저장소에 영구 저장되는 사용자 엔티티입니다.
//! 저장된 사용자는 항상 모든 검증 규칙을 만족합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// MongoDB 문서 형태를 그대로 따르며, 식별자는 `_id` 필드에 저장됩니다.
/// `birth_date`는 `yyyy-MM-dd` 문자열로 직렬화되므로 문자열 비교와
/// 날짜 비교의 순서가 일치합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 생성 시 할당하는 숫자 식별자 (이후 불변)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl User {
    /// 아직 저장되지 않은 새 사용자 생성
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
        address: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            id: None,
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        }
    }

    /// 같은 필드 값에 식별자를 지정한 사용자 반환
    pub fn with_id(self, id: i64) -> Self {
        Self { id: Some(id), ..self }
    }
}

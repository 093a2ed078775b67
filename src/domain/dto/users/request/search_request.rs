//! 생년월일 구간 검색 쿼리
use chrono::NaiveDate;
use serde::Deserialize;

/// `GET /users/search?fromDate=yyyy-MM-dd&toDate=yyyy-MM-dd`
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDateRangeQuery {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

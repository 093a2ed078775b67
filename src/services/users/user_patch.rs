//! # 부분 수정(PATCH) 엔진
//!
//! 이름 → 값 형태의 타입 없는 변경 요청을 기존 사용자에 적용합니다.
//!
//! ## 처리 단계
//!
//! ```text
//! { "firstName": "Updated", "ssn": "..." }
//!          │
//!          ▼
//! 1. UserPatch::parse     ─ 수정 가능 필드 집합 밖의 이름 → BadRequest (아무것도 쓰지 않음)
//!          │
//!          ▼
//! 2. UserField::apply     ─ 필드별 타입 변환, 불일치 필드는 기존 값 유지 + 메시지 수집
//!          │
//!          ▼
//! 3. 후보 UserRequest     ─ 나열된 필드만 교체, 식별자는 후보에 존재하지 않음
//!          │
//!          ▼
//! 4. UserValidator        ─ (UserService) 타입 불일치 + 규칙 위반을 합쳐 하나의 ValidationFailed
//!          │
//!          ▼
//! 5. UserStore::save      ─ (UserService) 성공 시에만 한 번 저장
//! ```
//!
//! 필드 이름은 [`UserField`]의 닫힌 집합으로만 해석되며, 각 필드는 타입이 정해진
//! 설정 함수를 통해서만 변경됩니다.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserRequest;
use crate::domain::entities::users::User;
use crate::utils::string_utils::clean_optional_string;

/// 요청과 응답 전반에서 사용하는 날짜 형식
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 부분 수정이 허용된 사용자 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Email,
    FirstName,
    LastName,
    BirthDate,
    Address,
    PhoneNumber,
}

impl UserField {
    pub const ALL: [UserField; 6] = [
        UserField::Email,
        UserField::FirstName,
        UserField::LastName,
        UserField::BirthDate,
        UserField::Address,
        UserField::PhoneNumber,
    ];

    /// JSON 필드 이름으로 찾기. 집합 밖의 이름(`id` 포함)은 `None`입니다.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            UserField::Email => "email",
            UserField::FirstName => "firstName",
            UserField::LastName => "lastName",
            UserField::BirthDate => "birthDate",
            UserField::Address => "address",
            UserField::PhoneNumber => "phoneNumber",
        }
    }

    /// 값을 필드 타입으로 변환하여 후보에 설정합니다.
    ///
    /// 타입이 맞지 않으면 후보를 건드리지 않고 필드 이름을 포함한 메시지를 반환합니다.
    pub fn apply(self, candidate: &mut UserRequest, value: &Value) -> Result<(), String> {
        match self {
            UserField::Email => candidate.email = self.required_string(value)?,
            UserField::FirstName => candidate.first_name = self.required_string(value)?,
            UserField::LastName => candidate.last_name = self.required_string(value)?,
            UserField::BirthDate => candidate.birth_date = self.optional_date(value)?,
            UserField::Address => candidate.address = self.optional_string(value)?,
            UserField::PhoneNumber => candidate.phone_number = self.optional_string(value)?,
        }
        Ok(())
    }

    fn required_string(self, value: &Value) -> Result<String, String> {
        match value {
            Value::String(s) => Ok(s.trim().to_string()),
            _ => Err(format!("{} must be a string", self.name())),
        }
    }

    fn optional_string(self, value: &Value) -> Result<Option<String>, String> {
        match value {
            Value::String(s) => Ok(clean_optional_string(Some(s.clone()))),
            Value::Null => Ok(None),
            _ => Err(format!("{} must be a string or null", self.name())),
        }
    }

    /// `null`은 그대로 `None`이 되어 검증 단계에서 "null" 위반으로 보고됩니다.
    fn optional_date(self, value: &Value) -> Result<Option<NaiveDate>, String> {
        let mismatch = || format!("{} must be a date in yyyy-MM-dd format", self.name());

        match value {
            Value::Null => Ok(None),
            Value::String(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Some)
                .map_err(|_| mismatch()),
            _ => Err(mismatch()),
        }
    }
}

/// 필드 집합 검사를 통과한 변경 요청
#[derive(Debug, Clone, PartialEq)]
pub struct UserPatch {
    updates: Vec<(UserField, Value)>,
}

impl UserPatch {
    /// 요청 본문의 각 이름을 [`UserField`]로 해석합니다.
    ///
    /// 하나라도 알 수 없거나 수정 불가능한 이름이 있으면 전체를 거부합니다.
    pub fn parse(updates: Map<String, Value>) -> AppResult<Self> {
        let mut accepted = Vec::with_capacity(updates.len());
        let mut rejected = Vec::new();

        for (name, value) in updates {
            match UserField::from_name(&name) {
                Some(field) => accepted.push((field, value)),
                None => rejected.push(name),
            }
        }

        if !rejected.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Field(s) cannot be updated: {}",
                rejected.join(", ")
            )));
        }

        Ok(Self { updates: accepted })
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.updates.iter().map(|(field, _)| field.name()).collect()
    }

    /// 기존 사용자에 변경 사항을 적용한 후보와 타입 불일치 메시지 목록을 반환합니다.
    ///
    /// 불일치 필드는 기존 값을 유지하므로, 후보는 나머지 필드의 검증에 그대로 사용할 수 있습니다.
    pub fn apply_to(&self, existing: &User) -> (UserRequest, Vec<String>) {
        let mut candidate = UserRequest::from(existing);
        let mut mismatches = Vec::new();

        for (field, value) in &self.updates {
            if let Err(message) = field.apply(&mut candidate, value) {
                mismatches.push(message);
            }
        }

        (candidate, mismatches)
    }
}

//! # 사용자 검증 계층
//!
//! 생성/전체 수정 요청과 PATCH 적용 후의 후보를 같은 규칙으로 검증합니다.
//! 모든 규칙은 독립적으로 평가되어 위반 사항이 빠짐없이 수집됩니다(fail-fast 아님).
//!
//! | 필드 | 규칙 | 종류 |
//! |------|------|------|
//! | `email` | 공백 아님 + `local@domain.tld` 형식 | Structural |
//! | `firstName` | 공백 아님 | Structural |
//! | `lastName` | 공백 아님 | Structural |
//! | `birthDate` | 존재 + 오늘보다 이전 | Structural |
//! | `birthDate` | 만 나이 ≥ 최소 나이 | Age |
//!
//! ## 에러 매핑
//!
//! 위반 사항이 모두 나이 규칙이면 [`AppError::AgeRejected`] (code 403),
//! 구조적 위반이 하나라도 있으면 모든 메시지를 담은 [`AppError::ValidationFailed`] (code 400)입니다.

use chrono::NaiveDate;
use validator::{Validate, ValidationError};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::user_request::{UserRequest, BLANK_CODE};
use crate::domain::policies::age_policy::is_of_age;

/// `validator` derive가 담당하는 필드 (Rust 필드명, JSON 필드명), 보고 순서대로
const DECLARED_FIELDS: [(&str, &str); 3] = [
    ("email", "email"),
    ("first_name", "firstName"),
    ("last_name", "lastName"),
];

const BIRTH_DATE: &str = "birthDate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// 필수값, 형식, 과거 날짜 규칙
    Structural,
    /// 최소 나이 규칙
    Age,
}

/// 검증 실패 사유 하나
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    fn structural(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, kind: ViolationKind::Structural, message: message.into() }
    }

    fn age(message: impl Into<String>) -> Self {
        Self { field: BIRTH_DATE, kind: ViolationKind::Age, message: message.into() }
    }
}

/// 사용자 후보 검증기
///
/// 최소 나이는 시작 시 설정에서 읽어 생성자로 전달됩니다.
#[derive(Debug, Clone, Copy)]
pub struct UserValidator {
    min_age: u32,
}

impl UserValidator {
    pub fn new(min_age: u32) -> Self {
        Self { min_age }
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    pub fn age_message(&self) -> String {
        format!("User's age is not allowed. Must be at least {} years old", self.min_age)
    }

    /// 후보의 모든 위반 사항을 필드 순서대로 반환합니다. 비어 있으면 유효합니다.
    pub fn violations(&self, candidate: &UserRequest, today: NaiveDate) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Err(errors) = candidate.validate() {
            let field_errors = errors.field_errors();

            for (field, json_name) in DECLARED_FIELDS {
                let Some(list) = field_errors
                    .get(field)
                    .or_else(|| field_errors.get(json_name))
                else {
                    continue;
                };

                for error in list.iter() {
                    violations.push(Violation::structural(json_name, describe(json_name, error)));
                }
            }
        }

        match candidate.birth_date {
            None => {
                violations.push(Violation::structural(BIRTH_DATE, "birthDate must not be null"));
            }
            Some(birth_date) => {
                if birth_date >= today {
                    violations.push(Violation::structural(BIRTH_DATE, "birthDate must be a date in the past"));
                }
                if !is_of_age(birth_date, self.min_age, today) {
                    violations.push(Violation::age(self.age_message()));
                }
            }
        }

        violations
    }

    /// 후보를 검증하고 위반 사항을 에러로 변환합니다.
    pub fn check(&self, candidate: &UserRequest, today: NaiveDate) -> AppResult<()> {
        self.check_with_mismatches(candidate, Vec::new(), today)
    }

    /// 앞 단계(PATCH 타입 변환)에서 수집된 불일치 메시지와 함께 후보를 검증합니다.
    ///
    /// 불일치는 구조적 위반으로 취급되어 검증 메시지 앞에 놓입니다.
    pub fn check_with_mismatches(
        &self,
        candidate: &UserRequest,
        mismatches: Vec<String>,
        today: NaiveDate,
    ) -> AppResult<()> {
        let violations = self.violations(candidate, today);

        if mismatches.is_empty() && violations.is_empty() {
            return Ok(());
        }

        if mismatches.is_empty() && violations.iter().all(|v| v.kind == ViolationKind::Age) {
            return Err(AppError::AgeRejected(self.age_message()));
        }

        let mut messages = mismatches;
        messages.extend(violations.into_iter().map(|v| v.message));

        Err(AppError::ValidationFailed(messages))
    }
}

fn describe(json_name: &str, error: &ValidationError) -> String {
    if error.code == BLANK_CODE {
        return format!("{} must not be blank", json_name);
    }

    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| format!("{} is invalid", json_name))
}

//! 사용자 생성/전체 수정 요청 DTO
//!
//! `POST /users/create`, `PUT /users/{userId}` 요청 본문이며,
//! 부분 수정(PATCH) 시에는 기존 사용자에 변경 사항을 적용한 "후보" 표현으로도 사용됩니다.
//! 구조적 규칙(이메일 형식, 필수 이름)은 `validator` derive로 선언하고,
//! 오늘 날짜와 최소 나이가 필요한 생년월일 규칙은 `UserValidator`가 평가합니다.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::User;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string, is_valid_string};

/// 이메일 형식 위반 메시지
pub const EMAIL_SHAPE_MESSAGE: &str = "Enter valid email. User correct pattern: example@example.com";

/// 공백 검증 실패 시 사용하는 에러 코드
pub const BLANK_CODE: &str = "blank";

/// `local@domain.tld` 형태의 단순 이메일 패턴
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("valid email regex")
});

/// 사용자 필드 집합 (식별자 제외)
///
/// 문자열 필드는 앞뒤 공백이 제거되며, 누락 시 빈 문자열이 되어 "blank" 위반으로 보고되고,
/// `birth_date` 누락은 `None`으로 남아 "null" 위반으로 보고됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,

    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,

    /// `yyyy-MM-dd`
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone_number: Option<String>,
}

impl UserRequest {
    /// 검증을 통과한 후보를 엔티티로 변환합니다.
    ///
    /// 생년월일이 없으면 `None`을 반환합니다.
    pub fn into_user(self, id: Option<i64>) -> Option<User> {
        let birth_date = self.birth_date?;

        Some(User {
            id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date,
            address: self.address,
            phone_number: self.phone_number,
        })
    }
}

impl From<&User> for UserRequest {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            birth_date: Some(user.birth_date),
            address: user.address.clone(),
            phone_number: user.phone_number.clone(),
        }
    }
}

/// 공백이 아닌 값인지 검증
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new(BLANK_CODE));
    }
    Ok(())
}

/// 이메일 필수 여부와 형식 검증
fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    validate_not_blank(email)?;

    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::new("email")
            .with_message(EMAIL_SHAPE_MESSAGE.into()));
    }
    Ok(())
}

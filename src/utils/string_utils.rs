//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 공백 문자만으로 이루어지지 않은 문자열인지 확인
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택 문자열을 정리합니다. 앞뒤 공백을 제거하고, 비어 있으면 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `address`, `phoneNumber`처럼 선택 입력 필드용 serde 역직렬화 함수
/// 필수 문자열 필드의 앞뒤 공백을 제거하여 역직렬화
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

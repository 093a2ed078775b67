//! API 에러 응답 본문
//!
//! 모든 4xx/5xx 응답에 사용되는 통일된 JSON 봉투입니다.
//!
//! ```json
//! {
//!   "errors": ["firstName must not be blank"],
//!   "status": 400,
//!   "detail": "Validation failed",
//!   "code": 400
//! }
//! ```

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// 통일된 API 에러 응답
///
/// `status`와 `code`를 제외한 모든 필드는 선택적이며, 값이 없으면 직렬화에서 생략됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// 사람이 읽을 수 있는 에러 메시지 목록 (순서 유지)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// HTTP 상태 코드
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// 도메인 코드 (나이 제한 위반은 403)
    pub code: u16,
    /// 링크 이름 → URL (현재 응답에서는 생성하지 않지만 수신 측 호환을 위해 유지)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<BTreeMap<String, String>>,
}

impl ApiError {
    pub fn new(status: u16, code: u16) -> Self {
        Self {
            errors: Vec::new(),
            status,
            detail: None,
            code,
            links: None,
        }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

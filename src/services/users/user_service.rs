//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 생성, 조회, 전체 수정, 부분 수정, 삭제, 생년월일 구간 검색을 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UserService                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐    │
//! │  │ UserPatch    │  │ UserValidator│  │ Clock        │    │
//! │  │ 필드 해석    │  │ 위반 수집    │  │ 오늘 날짜    │    │
//! │  └──────────────┘  └──────────────┘  └──────────────┘    │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │              Arc<dyn UserStore> (Mongo | Memory)         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 불변 조건
//!
//! - 존재 여부는 어떤 변경보다 먼저 확인합니다.
//! - 검증에 실패한 요청은 저장소에 쓰지 않습니다.
//! - 수정/부분 수정은 검증 통과 후 정확히 한 번 저장합니다.
//!
//! 의존성은 생성자로 전달되며 `web::Data<UserService>`로 핸들러와 공유됩니다.

use std::sync::Arc;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use crate::core::clock::Clock;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::repositories::users::UserStore;
use super::user_patch::UserPatch;
use super::user_validator::UserValidator;

/// 사용자 관리 서비스
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::core::clock::SystemClock;
/// use crate::repositories::users::MemoryUserRepository;
/// use crate::services::users::{UserService, UserValidator};
///
/// let service = UserService::new(
///     Arc::new(MemoryUserRepository::new()),
///     UserValidator::new(18),
///     Arc::new(SystemClock),
/// );
/// let user = service.get_user_by_id(1).await?;
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
    validator: UserValidator,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, validator: UserValidator, clock: Arc<dyn Clock>) -> Self {
        Self { store, validator, clock }
    }

    /// 새 사용자 등록
    ///
    /// 요청을 검증한 뒤 식별자 없이 저장하여 저장소가 새 식별자를 할당하게 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AgeRejected` - 최소 나이 미달만 위반한 경우
    /// * `AppError::ValidationFailed` - 구조적 위반이 하나라도 있는 경우
    pub async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse> {
        self.validate(&request)?;

        let user = Self::to_entity(request, None)?;
        let created = self.store.save(user).await?;

        log::info!("사용자 생성 완료: id={:?}", created.id);
        Ok(UserResponse::from(created))
    }

    pub async fn get_user_by_id(&self, id: i64) -> AppResult<UserResponse> {
        let user = self.find_existing(id).await?;
        Ok(UserResponse::from(user))
    }

    /// 사용자 전체 수정
    ///
    /// 식별자를 제외한 모든 필드를 요청 값으로 교체합니다. 요청에서 빠진 선택 필드는 비워집니다.
    pub async fn update_user(&self, id: i64, request: UserRequest) -> AppResult<UserResponse> {
        self.find_existing(id).await?;
        self.validate(&request)?;

        let user = Self::to_entity(request, Some(id))?;
        let updated = self.store.save(user).await?;

        log::info!("사용자 전체 수정 완료: id={}", id);
        Ok(UserResponse::from(updated))
    }

    /// 사용자 부분 수정
    ///
    /// 1. 존재 여부 확인 (없으면 `NotFound`)
    /// 2. 필드 이름 해석 (집합 밖의 이름이면 `BadRequest`)
    /// 3. 타입 변환 후 후보 생성 (불일치 필드는 기존 값 유지)
    /// 4. 후보 검증 (타입 불일치와 규칙 위반을 함께 `ValidationFailed`로 보고)
    /// 5. 한 번 저장
    ///
    /// 어느 단계에서든 실패하면 저장된 레코드는 그대로 유지됩니다.
    /// 변경 사항이 비어 있으면 저장하지 않고 기존 사용자를 반환합니다.
    pub async fn patch_user(&self, id: i64, updates: Map<String, Value>) -> AppResult<UserResponse> {
        let existing = self.find_existing(id).await?;

        let patch = UserPatch::parse(updates).inspect_err(|e| {
            log::warn!("사용자 부분 수정 거부: id={}, {}", id, e);
        })?;

        if patch.is_empty() {
            return Ok(UserResponse::from(existing));
        }

        let (candidate, mismatches) = patch.apply_to(&existing);
        self.validator
            .check_with_mismatches(&candidate, mismatches, self.clock.today())
            .inspect_err(|e| log::warn!("사용자 부분 수정 검증 실패: id={}, {}", id, e))?;

        let user = Self::to_entity(candidate, Some(id))?;
        let patched = self.store.save(user).await?;

        log::info!("사용자 부분 수정 완료: id={}, fields={:?}", id, patch.fields());
        Ok(UserResponse::from(patched))
    }

    /// 사용자 삭제
    ///
    /// 존재하지 않는 식별자도 성공으로 처리합니다.
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        if self.store.delete_by_id(id).await? {
            log::info!("사용자 삭제 완료: id={}", id);
        } else {
            log::debug!("삭제할 사용자 없음: id={}", id);
        }
        Ok(())
    }

    /// 생년월일이 `from..=to` 구간에 속하는 사용자 목록 (생년월일, 식별자 순)
    pub async fn search_users_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<UserResponse>> {
        if from > to {
            return Err(AppError::InvalidDateRange);
        }

        let users = self.store.find_by_birth_date_between(from, to).await?;
        log::debug!("생년월일 검색: {} ~ {}, {}건", from, to, users.len());

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn find_existing(&self, id: i64) -> AppResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found with ID: {}", id)))
    }

    fn validate(&self, candidate: &UserRequest) -> AppResult<()> {
        self.validator
            .check(candidate, self.clock.today())
            .inspect_err(|e| log::warn!("사용자 검증 실패: {}", e))
    }

    fn to_entity(candidate: UserRequest, id: Option<i64>) -> AppResult<User> {
        candidate
            .into_user(id)
            .ok_or_else(|| AppError::InternalError("검증된 사용자에 생년월일이 없습니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::core::clock::FixedClock;
    use crate::domain::dto::users::request::user_request::EMAIL_SHAPE_MESSAGE;
    use crate::repositories::users::MemoryUserRepository;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn service() -> UserService {
        UserService::new(
            Arc::new(MemoryUserRepository::new()),
            UserValidator::new(18),
            Arc::new(FixedClock(today())),
        )
    }

    fn petr() -> UserRequest {
        UserRequest {
            email: "petr@example.com".to_string(),
            first_name: "Petr".to_string(),
            last_name: "Kulinich".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            address: Some("123 Main St".to_string()),
            phone_number: Some("0506667788".to_string()),
        }
    }

    fn updates(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("updates must be an object"),
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_id() {
        let service = service();

        let created = service.create_user(petr()).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.first_name, "Petr");
        assert_eq!(service.get_user_by_id(created.id).await.unwrap(), created);
    }

    #[actix_web::test]
    async fn test_create_underage_is_age_rejected() {
        let service = service();
        let request = UserRequest { birth_date: NaiveDate::from_ymd_opt(2010, 1, 1), ..petr() };

        let error = service.create_user(request).await.unwrap_err();
        assert_eq!(error.code(), 403);
    }

    #[actix_web::test]
    async fn test_get_unknown_user_is_not_found() {
        let error = service().get_user_by_id(404).await.unwrap_err();
        assert_eq!(error, AppError::NotFound("User not found with ID: 404".to_string()));
    }

    #[actix_web::test]
    async fn test_patch_changes_only_listed_field() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        let patched = service
            .patch_user(created.id, updates(json!({ "firstName": "UpdatedFirstName" })))
            .await
            .unwrap();

        let stored = service.get_user_by_id(created.id).await.unwrap();
        assert_eq!(patched, stored);
        assert_eq!(stored.first_name, "UpdatedFirstName");
        assert_eq!(stored, UserResponse { first_name: "UpdatedFirstName".to_string(), ..created });
    }

    #[actix_web::test]
    async fn test_patch_with_unknown_field_leaves_record_unchanged() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        let error = service
            .patch_user(created.id, updates(json!({ "firstName": "Changed", "ssn": "123-45-6789" })))
            .await
            .unwrap_err();

        assert_eq!(error, AppError::BadRequest("Field(s) cannot be updated: ssn".to_string()));
        assert_eq!(service.get_user_by_id(created.id).await.unwrap(), created);
    }

    #[actix_web::test]
    async fn test_patch_failing_validation_is_atomic() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        let error = service
            .patch_user(created.id, updates(json!({ "lastName": "Changed", "firstName": "" })))
            .await
            .unwrap_err();

        assert_eq!(error, AppError::ValidationFailed(vec!["firstName must not be blank".to_string()]));
        let stored = service.get_user_by_id(created.id).await.unwrap();
        assert_eq!(stored.first_name, "Petr");
        assert_eq!(stored.last_name, "Kulinich");
    }

    #[actix_web::test]
    async fn test_patch_reports_type_mismatch_and_blank_field_together() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        let error = service
            .patch_user(created.id, updates(json!({ "firstName": "", "lastName": 5 })))
            .await
            .unwrap_err();

        assert_eq!(error, AppError::ValidationFailed(vec![
            "lastName must be a string".to_string(),
            "firstName must not be blank".to_string(),
        ]));
        assert_eq!(service.get_user_by_id(created.id).await.unwrap(), created);
    }

    #[actix_web::test]
    async fn test_patch_making_user_underage_is_age_rejected() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        let error = service
            .patch_user(created.id, updates(json!({ "birthDate": "2010-01-01" })))
            .await
            .unwrap_err();

        assert_eq!(error, AppError::AgeRejected(
            "User's age is not allowed. Must be at least 18 years old".to_string()
        ));
        assert_eq!(error.code(), 403);

        let stored = service.get_user_by_id(created.id).await.unwrap();
        assert_eq!(stored.birth_date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(stored, created);
    }

    #[actix_web::test]
    async fn test_create_with_padded_email_is_rejected() {
        let service = service();
        let request = UserRequest { email: "  petr@example.com  ".to_string(), ..petr() };

        let error = service.create_user(request).await.unwrap_err();
        assert_eq!(error, AppError::ValidationFailed(vec![EMAIL_SHAPE_MESSAGE.to_string()]));
    }

    #[actix_web::test]
    async fn test_patch_trims_email_before_saving() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        let patched = service
            .patch_user(created.id, updates(json!({ "email": "  updated_email@example.com  " })))
            .await
            .unwrap();

        assert_eq!(patched.email, "updated_email@example.com");
        assert_eq!(service.get_user_by_id(created.id).await.unwrap().email, "updated_email@example.com");
    }

    #[actix_web::test]
    async fn test_patch_unknown_user_is_not_found_before_field_check() {
        let error = service()
            .patch_user(99, updates(json!({ "id": 1 })))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_empty_patch_returns_existing_user() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        let patched = service.patch_user(created.id, Map::new()).await.unwrap();
        assert_eq!(patched, created);
    }

    #[actix_web::test]
    async fn test_update_replaces_all_fields() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        let request = UserRequest {
            email: "john.doe@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 20),
            address: None,
            phone_number: None,
        };
        let updated = service.update_user(created.id, request).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.email, "john.doe@example.com");
        assert_eq!(updated.address, None);
    }

    #[actix_web::test]
    async fn test_update_after_delete_is_not_found() {
        let service = service();
        let created = service.create_user(petr()).await.unwrap();

        service.delete_user(created.id).await.unwrap();
        service.delete_user(created.id).await.unwrap();

        let error = service.update_user(created.id, petr()).await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_search_range() {
        let service = service();
        for (name, birth) in [("Anna", (1990, 1, 1)), ("Boris", (2000, 6, 1)), ("Clara", (2005, 1, 1))] {
            let request = UserRequest {
                first_name: name.to_string(),
                birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2),
                ..petr()
            };
            service.create_user(request).await.unwrap();
        }

        let from = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2005, 1, 1).unwrap();
        let names: Vec<String> = service
            .search_users_by_birth_date_range(from, to)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.first_name)
            .collect();
        assert_eq!(names, vec!["Boris", "Clara"]);

        let error = service.search_users_by_birth_date_range(to, from).await.unwrap_err();
        assert_eq!(error, AppError::InvalidDateRange);
    }
}

//! # User Management HTTP Handlers
//!
//! 사용자 레코드를 다루는 HTTP 엔드포인트입니다.
//! 모든 핸들러는 `web::Data<UserService>`를 통해 서비스에 접근하며,
//! 실패는 `AppError`로 반환되어 [`ApiError`](crate::domain::dto::ApiError) 본문으로 변환됩니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users/create` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users/search?fromDate=&toDate=` | 생년월일 구간 검색 | 200 OK |
//! | `GET` | `/users/{userId}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/users/{userId}` | 사용자 전체 수정 | 200 OK |
//! | `PATCH` | `/users/{userId}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/users/{userId}` | 사용자 삭제 | 204 No Content |
//!
//! `/search`는 `/{userId}`보다 먼저 등록되어야 합니다.
//!
//! ## 에러 응답
//!
//! ```json
//! {
//!   "errors": ["firstName must not be blank"],
//!   "status": 400,
//!   "detail": "Validation failed",
//!   "code": 400
//! }
//! ```
//!
//! 최소 나이 미달은 `status: 400`, `code: 403`으로 응답하며,
//! 역전된 검색 구간(`fromDate > toDate`)은 본문 없는 400입니다.

use actix_web::{web, HttpResponse, delete, get, patch, post, put};
use serde_json::{Map, Value};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{BirthDateRangeQuery, UserRequest};
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users/create`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "petr@example.com",
///   "firstName": "Petr",
///   "lastName": "Kulinich",
///   "birthDate": "2000-01-01",
///   "address": "123 Main St",
///   "phoneNumber": "0506667788"
/// }
/// ```
///
/// # 응답
///
/// * `201 Created` - 식별자가 할당된 `UserResponse`
/// * `400 Bad Request` - 검증 실패 (나이 미달은 `code: 403`)
#[post("/create")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 생년월일 구간 검색 핸들러
///
/// `GET /users/search?fromDate=2000-01-01&toDate=2005-01-01`
///
/// 구간은 양 끝을 포함하며 결과는 생년월일, 식별자 순입니다.
#[get("/search")]
pub async fn search_users(
    service: web::Data<UserService>,
    query: web::Query<BirthDateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let BirthDateRangeQuery { from_date, to_date } = query.into_inner();
    let users = service.search_users_by_birth_date_range(from_date, to_date).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 전체 수정 핸들러
///
/// `PUT /users/{userId}`
///
/// 본문은 생성 요청과 같은 형태이며, 존재하지 않는 식별자는 `404`입니다.
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.update_user(user_id.into_inner(), payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정 핸들러
///
/// `PATCH /users/{userId}`
///
/// ```json
/// { "firstName": "UpdatedFirstName", "email": "updated_email@example.com" }
/// ```
///
/// 수정 가능한 필드: `email`, `firstName`, `lastName`, `birthDate`, `address`, `phoneNumber`.
/// 그 밖의 이름(`id` 등)이 하나라도 있으면 아무것도 변경하지 않고 `400`으로 응답합니다.
#[patch("/{user_id}")]
pub async fn patch_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let user = service.patch_user(user_id.into_inner(), payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/{userId}`
///
/// 존재하지 않는 식별자도 `204 No Content`로 응답합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(user_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use chrono::NaiveDate;
    use serde_json::json;
    use crate::core::clock::FixedClock;
    use crate::repositories::users::MemoryUserRepository;
    use crate::routes::configure_all_routes;
    use crate::services::users::UserValidator;
    use super::*;

    fn user_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(
            Arc::new(MemoryUserRepository::new()),
            UserValidator::new(18),
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())),
        ))
    }

    fn petr() -> Value {
        json!({
            "email": "petr@example.com",
            "firstName": "Petr",
            "lastName": "Kulinich",
            "birthDate": "2000-01-01",
            "address": "123 Main St",
            "phoneNumber": "0506667788"
        })
    }

    #[actix_web::test]
    async fn test_create_patch_delete_then_put_scenario() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/users/create").set_json(petr()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["firstName"], "Petr");
        assert_eq!(created["birthDate"], "2000-01-01");

        let req = test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .set_json(json!({ "firstName": "UpdatedFirstName" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let patched: Value = test::read_body_json(resp).await;
        assert_eq!(patched["id"], id);
        assert_eq!(patched["firstName"], "UpdatedFirstName");
        assert_eq!(patched["lastName"], "Kulinich");

        let req = test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, patched);

        let req = test::TestRequest::delete().uri(&format!("/users/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(petr())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["errors"][0], format!("User not found with ID: {}", id));
    }

    #[actix_web::test]
    async fn test_underage_create_uses_age_code() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        )
        .await;

        let mut body = petr();
        body["birthDate"] = json!("2010-01-01");
        let req = test::TestRequest::post().uri("/users/create").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["code"], 403);
        assert_eq!(body["errors"][0], "User's age is not allowed. Must be at least 18 years old");
    }

    #[actix_web::test]
    async fn test_create_lists_every_violation() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_json(json!({ "email": "UpdatedEmail", "firstName": "", "birthDate": "2000-01-01" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["errors"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn test_patch_with_immutable_field_is_rejected() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/users/create").set_json(petr()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_i64().unwrap();

        for forbidden in [json!({ "id": 999 }), json!({ "ssn": "123-45-6789", "firstName": "X" })] {
            let req = test::TestRequest::patch()
                .uri(&format!("/users/{}", id))
                .set_json(forbidden)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        let req = test::TestRequest::get().uri(&format!("/users/{}", id)).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_search_with_inverted_range_has_empty_body() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/users/search?fromDate=2005-01-01&toDate=2000-01-01")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_search_returns_users_in_range() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        )
        .await;

        for birth_date in ["1990-01-01", "2001-03-04", "2000-01-01"] {
            let mut body = petr();
            body["birthDate"] = json!(birth_date);
            let req = test::TestRequest::post().uri("/users/create").set_json(body).to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/users/search?fromDate=2000-01-01&toDate=2005-01-01")
            .to_request();
        let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        let dates: Vec<&str> = found.iter().filter_map(|u| u["birthDate"].as_str()).collect();
        assert_eq!(dates, vec!["2000-01-01", "2001-03-04"]);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_api_error() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users/create")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"email\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 400);
        assert!(body["errors"][0].is_string());
    }

    #[actix_web::test]
    async fn test_delete_unknown_user_is_no_content() {
        let app = test::init_service(
            App::new().app_data(user_service()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::delete().uri("/users/12345").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}

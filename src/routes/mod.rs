//! API 라우트 설정 모듈
//!
//! 사용자 관리 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(user_service.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /users/create` - 사용자 생성
/// - `GET /users/search` - 생년월일 구간 검색
/// - `GET /users/{userId}` - 사용자 조회
/// - `PUT /users/{userId}` - 사용자 전체 수정
/// - `PATCH /users/{userId}` - 사용자 부분 수정
/// - `DELETE /users/{userId}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users/create \
///   -H "Content-Type: application/json" \
///   -d '{"email":"petr@example.com","firstName":"Petr","lastName":"Kulinich","birthDate":"2000-01-01"}'
///
/// curl -X PATCH http://localhost:8080/users/1 \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"UpdatedFirstName"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .app_data(handlers::json_config())
            .app_data(handlers::query_config())
            .app_data(handlers::path_config())
            .service(handlers::users::create_user)
            // `/search`는 `/{user_id}`보다 먼저 매칭되어야 함
            .service(handlers::users::search_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_registry_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_registry_backend");
        assert!(body["timestamp"].is_string());
    }
}

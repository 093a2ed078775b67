//! 사용자 레지스트리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 서비스를 초기화합니다.
//! `USER_STORE`에 따라 MongoDB 또는 메모리 저장소를 연결합니다.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_registry_backend::config::{Environment, ServerConfig, StoreConfig, StoreKind, UserPolicyConfig};
use user_registry_backend::core::clock::SystemClock;
use user_registry_backend::core::errors::{AppError, ErrorContext};
use user_registry_backend::db::Database;
use user_registry_backend::repositories::users::{MemoryUserRepository, UserRepository, UserStore};
use user_registry_backend::routes::configure_all_routes;
use user_registry_backend::services::users::{UserService, UserValidator};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 레지스트리 서비스 시작중... ({:?})", Environment::current());

    let store = initialize_user_store().await?;

    let min_age = UserPolicyConfig::min_age();
    info!("👤 최소 가입 나이: {}세", min_age);

    let user_service = web::Data::new(UserService::new(
        store,
        UserValidator::new(min_age),
        Arc::new(SystemClock),
    ));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(user_service.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// `PROFILE`에 맞는 env 파일을 읽어 이후의 설정 구조체가 참조할 변수를 채웁니다
///
/// 로컬 개발은 `.env.dev`(보통 `USER_STORE=memory`), 배포는 `.env.prod`
/// (`MONGODB_URI`, `DATABASE_NAME`, `USER_MIN_AGE`)를 사용합니다.
/// 파일이 없어도 이미 설정된 프로세스 환경 변수로 계속 진행합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_registry_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 사용자 저장소를 초기화합니다
///
/// * `USER_STORE=mongo` (기본값) - MongoDB 연결 후 인덱스 생성
/// * `USER_STORE=memory` - 프로세스 메모리 저장소 (재시작 시 초기화)
///
/// # Errors
///
/// * MongoDB 연결 또는 인덱스 생성 실패 시
async fn initialize_user_store() -> std::io::Result<Arc<dyn UserStore>> {
    match StoreConfig::kind() {
        StoreKind::Memory => {
            info!("🧠 메모리 사용자 저장소 사용");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
        StoreKind::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new()
                .await
                .context("데이터베이스 연결 실패")
                .map_err(startup_error)?;

            let repository = UserRepository::new(Arc::new(database));
            repository.create_indexes().await.map_err(startup_error)?;

            Ok(Arc::new(repository))
        }
    }
}

fn startup_error(e: AppError) -> std::io::Error {
    error!("❌ 저장소 초기화 실패: {}", e);
    std::io::Error::other(e.to_string())
}

/// 사용자 API용 CORS 정책
///
/// 로컬 관리 화면(`:3000`)과 서버 자체 주소만 허용합니다. 쿠키나 인증 헤더를 쓰지 않으므로
/// JSON 요청에 필요한 헤더와 `/users` 엔드포인트의 메서드(PATCH 포함)만 엽니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 클라이언트 IP별 요청 제한 값
///
/// `RATE_LIMIT_PER_SECOND`(기본 100)과 `RATE_LIMIT_BURST_SIZE`(기본 200)을 읽으며,
/// 잘못된 값은 에러 로그를 남기고 기본값으로 대체합니다.
fn load_rate_limit_config() -> RateLimitConfig {
    let config = RateLimitConfig {
        per_second: env_or_default("RATE_LIMIT_PER_SECOND", 100),
        burst_size: env_or_default("RATE_LIMIT_BURST_SIZE", 200),
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

fn env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match std::env::var(name) {
        Err(_) => default,
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
    }
}

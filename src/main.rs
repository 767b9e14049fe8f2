//! 블로그 API 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 초기화합니다.
//! `STORAGE_BACKEND`에 따라 MongoDB 또는 메모리 저장소를 주입합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use blog_api::config::{Environment, RateLimitConfig, ServerConfig, StorageBackend};
use blog_api::db::Database;
use blog_api::repositories::authors::MongoAuthorRepository;
use blog_api::repositories::blog_posts::MongoBlogPostRepository;
use blog_api::repositories::memory::InMemoryStore;
use blog_api::repositories::{AuthorRepository, BlogPostRepository};
use blog_api::routes::configure_all_routes;
use blog_api::services::authors::AuthorService;
use blog_api::services::blog_posts::BlogPostService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 블로그 API 서비스 시작중... (환경: {:?})", Environment::current());

    let (author_repo, blog_post_repo) = initialize_repositories().await?;

    let author_service = web::Data::new(AuthorService::new(
        author_repo.clone(),
        blog_post_repo.clone(),
    ));
    let blog_post_service = web::Data::new(BlogPostService::new(author_repo, blog_post_repo));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(author_service, blog_post_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    author_service: web::Data<AuthorService>,
    blog_post_service: web::Data<BlogPostService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = ServerConfig::cors_allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(author_service.clone())
            .app_data(blog_post_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=blog_api::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 저장소 백엔드를 초기화합니다
///
/// MongoDB 백엔드는 연결 확인 후 인덱스(`userName` 고유, 게시글 `author`/`created`)를 생성합니다.
/// 인덱스 생성 실패는 경고만 남기고 계속 진행합니다.
async fn initialize_repositories()
-> io::Result<(Arc<dyn AuthorRepository>, Arc<dyn BlogPostRepository>)> {
    match StorageBackend::current() {
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중: 재시작 시 데이터가 사라집니다");
            let store = Arc::new(InMemoryStore::new());
            let author_repo: Arc<dyn AuthorRepository> = store.clone();
            let blog_post_repo: Arc<dyn BlogPostRepository> = store;

            Ok((author_repo, blog_post_repo))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?);

            info!("✅ MongoDB 연결 성공 ({})", database.database_name());

            let author_repo = MongoAuthorRepository::new(database.clone());
            let blog_post_repo = MongoBlogPostRepository::new(database);

            if let Err(e) = author_repo.create_indexes().await {
                warn!("작성자 인덱스 생성 실패: {}", e);
            }
            if let Err(e) = blog_post_repo.create_indexes().await {
                warn!("게시글 인덱스 생성 실패: {}", e);
            }

            let author_repo: Arc<dyn AuthorRepository> = Arc::new(author_repo);
            let blog_post_repo: Arc<dyn BlogPostRepository> = Arc::new(blog_post_repo);

            Ok((author_repo, blog_post_repo))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다. `*`는 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

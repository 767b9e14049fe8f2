//! API 라우트 설정 모듈
//!
//! 작성자/게시글 REST 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Features
//!
//! - 작성자 CRUD API 엔드포인트 (`/authors`)
//! - 게시글 CRUD API 엔드포인트 (`/blogs`, 별칭 `/blog-posts`)
//! - JSON 본문 파싱 실패를 400 `{"error": ...}` 응답으로 변환
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(author_service)
//!     .app_data(blog_post_service)
//!     .configure(configure_all_routes);
//! ```

use crate::config::{Environment, StorageBackend};
use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 핸들러가 사용하는 서비스(`web::Data<AuthorService>`, `web::Data<BlogPostService>`)는
/// 호출 측에서 미리 등록해야 합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_author_routes(cfg);
    configure_blog_post_routes(cfg);
}

/// 잘못된 JSON 본문을 `AppError::ValidationError`로 변환합니다
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("요청 본문 파싱 실패: {}", err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 작성자 관련 라우트를 설정합니다
///
/// - `GET /authors` - 작성자 목록
/// - `POST /authors` - 작성자 생성
/// - `PUT /authors/{id}` - 작성자 부분 수정
/// - `DELETE /authors/{id}` - 작성자 및 게시글 삭제
///
/// ```bash
/// curl -X POST http://localhost:8080/authors \
///   -H "Content-Type: application/json" \
///   -d '{"firstName":"Ada","lastName":"Lovelace","userName":"ada"}'
/// ```
fn configure_author_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/authors")
            .service(handlers::authors::list_authors)
            .service(handlers::authors::create_author)
            .service(handlers::authors::update_author)
            .service(handlers::authors::delete_author)
    );
}

/// 게시글 관련 라우트를 설정합니다
///
/// 같은 핸들러 묶음을 `/blogs`와 `/blog-posts` 두 경로에 등록합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/blogs \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Notes","content":"...","author_id":"507f1f77bcf86cd799439011"}'
/// ```
fn configure_blog_post_routes(cfg: &mut web::ServiceConfig) {
    for path in ["/blogs", "/blog-posts"] {
        cfg.service(
            web::scope(path)
                .service(handlers::blog_posts::list_blog_posts)
                .service(handlers::blog_posts::get_blog_post)
                .service(handlers::blog_posts::create_blog_post)
                .service(handlers::blog_posts::update_blog_post)
                .service(handlers::blog_posts::delete_blog_post)
        );
    }
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// `features.database`는 `STORAGE_BACKEND` 설정에 따라 `MongoDB` 또는 `In-memory`입니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "blog_api",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "environment": "development",
///   "features": {
///     "database": "MongoDB",
///     "population": "$lookup"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "blog_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": format!("{:?}", Environment::current()).to_lowercase(),
        "features": {
            "database": StorageBackend::current().label(),
            "population": "$lookup"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "blog_api");
        assert_eq!(body["features"]["database"], StorageBackend::current().label());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

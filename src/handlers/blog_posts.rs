//! # Blog Post HTTP Handlers
//!
//! 게시글 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 같은 핸들러가 `/blogs`와 `/blog-posts` 두 스코프에 등록됩니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/blogs` | 게시글 목록 | 200 OK |
//! | `GET` | `/blogs/{id}` | 게시글 조회 | 200 OK |
//! | `POST` | `/blogs` | 게시글 생성 | 201 Created |
//! | `PUT` | `/blogs/{id}` | 게시글 부분 수정 | 200 OK |
//! | `DELETE` | `/blogs/{id}` | 게시글 삭제 | 204 No Content |
//!
//! ## 응답 예시
//!
//! ```json
//! {
//!   "id": "65a1f0c2e4b0a1b2c3d4e5f6",
//!   "title": "Notes on the Analytical Engine",
//!   "content": "...",
//!   "author": "Ada Lovelace",
//!   "comments": [{ "content": "Brilliant" }],
//!   "created": "2024-01-01T12:00:00Z"
//! }
//! ```

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::blog_posts::{CreateBlogPostRequest, UpdateBlogPostRequest};
use crate::services::blog_posts::BlogPostService;

#[get("")]
pub async fn list_blog_posts(
    service: web::Data<BlogPostService>,
) -> Result<HttpResponse, AppError> {
    let posts = service.list_blog_posts().await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/{id}")]
pub async fn get_blog_post(
    service: web::Data<BlogPostService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = service.get_blog_post(&id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 게시글 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "Notes on the Analytical Engine",
///   "content": "...",
///   "author_id": "507f1f77bcf86cd799439011",
///   "comments": [{ "content": "Brilliant" }]
/// }
/// ```
///
/// 작성자가 존재하지 않으면 400 `"Author does not exist"`를 반환합니다.
#[post("")]
pub async fn create_blog_post(
    service: web::Data<BlogPostService>,
    payload: web::Json<CreateBlogPostRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let post = service.create_blog_post(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(post))
}

/// 게시글 수정 핸들러
///
/// 본문의 `id`는 경로의 `{id}`와 같아야 하며, `title`, `content`, `author_id`만 반영됩니다.
#[put("/{id}")]
pub async fn update_blog_post(
    service: web::Data<BlogPostService>,
    id: web::Path<String>,
    payload: web::Json<UpdateBlogPostRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let post = service.update_blog_post(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

#[delete("/{id}")]
pub async fn delete_blog_post(
    service: web::Data<BlogPostService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_blog_post(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

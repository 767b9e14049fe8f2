//! # Author HTTP Handlers
//!
//! 작성자 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/authors` | 작성자 목록 | 200 OK |
//! | `POST` | `/authors` | 작성자 생성 | 201 Created |
//! | `PUT` | `/authors/{id}` | 작성자 부분 수정 | 200 OK |
//! | `DELETE` | `/authors/{id}` | 작성자 및 게시글 삭제 | 204 No Content |

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::authors::{CreateAuthorRequest, UpdateAuthorRequest};
use crate::services::authors::AuthorService;

/// 작성자 목록 조회 핸들러
#[get("")]
pub async fn list_authors(
    service: web::Data<AuthorService>,
) -> Result<HttpResponse, AppError> {
    let authors = service.list_authors().await?;

    Ok(HttpResponse::Ok().json(authors))
}

/// 작성자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace", "userName": "ada" }
/// ```
///
/// # 응답
///
/// * 201 - `{ "id", "firstName", "lastName", "userName" }`
/// * 400 - 필수 필드 누락 또는 `"Author already exists"`
#[post("")]
pub async fn create_author(
    service: web::Data<AuthorService>,
    payload: web::Json<CreateAuthorRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let author = service.create_author(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(author))
}

/// 작성자 수정 핸들러
///
/// 본문의 `id`는 경로의 `{id}`와 같아야 합니다.
///
/// ```bash
/// curl -X PUT http://localhost:8080/authors/507f1f77bcf86cd799439011 \
///   -H "Content-Type: application/json" \
///   -d '{"id":"507f1f77bcf86cd799439011","userName":"countess"}'
/// ```
#[put("/{id}")]
pub async fn update_author(
    service: web::Data<AuthorService>,
    id: web::Path<String>,
    payload: web::Json<UpdateAuthorRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let author = service.update_author(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(author))
}

/// 작성자 삭제 핸들러
///
/// 작성자의 게시글을 먼저 모두 삭제한 뒤 작성자를 삭제합니다.
#[delete("/{id}")]
pub async fn delete_author(
    service: web::Data<AuthorService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_author(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

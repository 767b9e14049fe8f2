//! # 작성자 관리 서비스 구현
//!
//! 작성자 목록 조회, 생성, 부분 수정, 삭제(게시글 cascade 포함)의 비즈니스 규칙을 구현합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Handler ──► AuthorService ──► AuthorRepository   (작성자 CRUD, userName 중복 검사)
//!                      │
//!                      └──────► BlogPostRepository (작성자 삭제 시 게시글 cascade 삭제)
//! ```

use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::authors::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest},
    repositories::{
        authors::author_repo::{AUTHOR_ALREADY_EXISTS, USER_NAME_IN_USE},
        AuthorRepository, BlogPostRepository,
    },
    utils::object_id::{ensure_ids_match, parse_object_id},
};

/// 작성자 비즈니스 로직 서비스
///
/// 저장소는 생성 시점에 주입되므로 테스트에서는 메모리 저장소로 대체할 수 있습니다.
///
/// ```rust,ignore
/// let store = Arc::new(InMemoryStore::new());
/// let service = AuthorService::new(store.clone(), store);
/// let author = service.create_author(request).await?;
/// ```
pub struct AuthorService {
    author_repo: Arc<dyn AuthorRepository>,
    blog_post_repo: Arc<dyn BlogPostRepository>,
}

impl AuthorService {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        blog_post_repo: Arc<dyn BlogPostRepository>,
    ) -> Self {
        Self {
            author_repo,
            blog_post_repo,
        }
    }

    pub async fn list_authors(&self) -> AppResult<Vec<AuthorResponse>> {
        let authors = self.author_repo.find_all().await?;

        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }

    /// 새 작성자 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthorResponse)` - 생성된 작성자
    /// * `Err(AppError::ValidationError)` - 필수 필드 누락 또는 userName 중복
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    pub async fn create_author(&self, request: CreateAuthorRequest) -> AppResult<AuthorResponse> {
        let author = request.into_author()?;

        if self.author_repo.find_by_user_name(&author.user_name).await?.is_some() {
            log::warn!("{}: {}", AUTHOR_ALREADY_EXISTS, author.user_name);
            return Err(AppError::ValidationError(AUTHOR_ALREADY_EXISTS.to_string()));
        }

        let created = self.author_repo.create(author).await?;
        log::info!("작성자 생성: {} ({})", created.user_name, created.id_string().unwrap_or_default());

        Ok(AuthorResponse::from(created))
    }

    /// 작성자 부분 수정
    ///
    /// 경로 id와 본문 id가 다르면 아무것도 변경하지 않고 400을 반환합니다.
    /// 새 userName이 다른 작성자의 것이면 400, 작성자가 없으면 404입니다.
    pub async fn update_author(
        &self,
        path_id: &str,
        request: UpdateAuthorRequest,
    ) -> AppResult<AuthorResponse> {
        ensure_ids_match(path_id, request.id.as_deref())?;
        let id = parse_object_id(path_id)?;
        let patch = request.into_patch();

        if let Some(user_name) = &patch.user_name {
            let holder = self.author_repo.find_by_user_name(user_name).await?;
            if holder.is_some_and(|author| author.id != Some(id)) {
                log::warn!("{}: {}", USER_NAME_IN_USE, user_name);
                return Err(AppError::ValidationError(USER_NAME_IN_USE.to_string()));
            }
        }

        let updated = self.author_repo
            .update(&id, &patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;

        Ok(AuthorResponse::from(updated))
    }

    /// 작성자와 그 작성자의 모든 게시글 삭제
    ///
    /// 게시글을 먼저 삭제한 뒤 작성자를 삭제합니다. 트랜잭션이 아니므로
    /// 작성자 삭제가 실패해도 이미 삭제된 게시글은 복구되지 않습니다.
    /// 존재하지 않는 작성자 삭제도 성공으로 처리합니다.
    pub async fn delete_author(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        let deleted_posts = self.blog_post_repo.delete_by_author(&id).await?;
        let deleted = self.author_repo.delete(&id).await?;

        if deleted {
            log::info!("작성자 {} 및 게시글 {}개 삭제", id.to_hex(), deleted_posts);
        } else {
            log::info!("삭제할 작성자 없음: {}", id.to_hex());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::blog_posts::blog_post::BlogPost;
    use crate::repositories::memory::InMemoryStore;

    fn service() -> (AuthorService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (AuthorService::new(store.clone(), store.clone()), store)
    }

    fn create_request(user_name: &str) -> CreateAuthorRequest {
        CreateAuthorRequest {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            user_name: Some(user_name.to_string()),
        }
    }

    #[actix_web::test]
    async fn test_create_author_rejects_duplicate_user_name() {
        let (service, _) = service();

        service.create_author(create_request("ada")).await.unwrap();
        let duplicate = service.create_author(create_request("ada")).await;

        assert!(matches!(duplicate, Err(AppError::ValidationError(_))));
        assert_eq!(service.list_authors().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_update_author_with_mismatched_ids_changes_nothing() {
        let (service, _) = service();
        let created = service.create_author(create_request("ada")).await.unwrap();

        let request = UpdateAuthorRequest {
            id: Some("someone-else".to_string()),
            first_name: Some("Changed".to_string()),
            ..Default::default()
        };
        let result = service.update_author(&created.id, request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(service.list_authors().await.unwrap()[0].first_name, "Ada");
    }

    #[actix_web::test]
    async fn test_update_unknown_author_is_not_found() {
        let (service, _) = service();
        let id = mongodb::bson::oid::ObjectId::new().to_hex();

        let request = UpdateAuthorRequest {
            id: Some(id.clone()),
            last_name: Some("Byron".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            service.update_author(&id, request).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_delete_author_cascades_to_posts() {
        let (service, store) = service();
        let ada = service.create_author(create_request("ada")).await.unwrap();
        let grace = service.create_author(create_request("grace")).await.unwrap();
        let ada_id = parse_object_id(&ada.id).unwrap();
        let grace_id = parse_object_id(&grace.id).unwrap();

        for (author, title) in [(ada_id, "a1"), (ada_id, "a2"), (grace_id, "g1")] {
            BlogPostRepository::create(
                store.as_ref(),
                BlogPost::new(title.to_string(), "body".to_string(), author, Vec::new()),
            )
            .await
            .unwrap();
        }

        service.delete_author(&ada.id).await.unwrap();

        let authors = service.list_authors().await.unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].user_name, "grace");

        let posts = store.find_all_populated().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post.author, grace_id);
    }
}

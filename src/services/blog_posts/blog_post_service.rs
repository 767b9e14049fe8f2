//! # 게시글 관리 서비스 구현
//!
//! 게시글 목록/단건 조회, 생성, 부분 수정, 삭제의 비즈니스 규칙을 구현합니다.
//! 조회 결과는 항상 저장소의 populate 연산을 거쳐 작성자 표시 이름을 포함합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::blog_posts::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest},
        entities::blog_posts::blog_post::{BlogPost, PopulatedBlogPost},
    },
    repositories::{AuthorRepository, BlogPostRepository},
    utils::object_id::{ensure_ids_match, parse_object_id},
};

pub const AUTHOR_DOES_NOT_EXIST: &str = "Author does not exist";

/// 게시글 비즈니스 로직 서비스
pub struct BlogPostService {
    author_repo: Arc<dyn AuthorRepository>,
    blog_post_repo: Arc<dyn BlogPostRepository>,
}

impl BlogPostService {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        blog_post_repo: Arc<dyn BlogPostRepository>,
    ) -> Self {
        Self {
            author_repo,
            blog_post_repo,
        }
    }

    pub async fn list_blog_posts(&self) -> AppResult<Vec<BlogPostResponse>> {
        let posts = self.blog_post_repo.find_all_populated().await?;

        Ok(posts.into_iter().map(BlogPostResponse::from).collect())
    }

    pub async fn get_blog_post(&self, id: &str) -> AppResult<BlogPostResponse> {
        let id = parse_object_id(id)?;
        let post = self.find_populated(&id).await?;

        Ok(BlogPostResponse::from(post))
    }

    /// 새 게시글 생성
    ///
    /// 참조하는 작성자가 존재하지 않거나 id 형식이 잘못되었으면 400이며 게시글은 생성되지 않습니다.
    pub async fn create_blog_post(&self, request: CreateBlogPostRequest) -> AppResult<BlogPostResponse> {
        let new_post = request.into_new_post()?;
        let author_id = parse_object_id(&new_post.author_id)
            .map_err(|_| AppError::ValidationError(AUTHOR_DOES_NOT_EXIST.to_string()))?;
        self.ensure_author_exists(&author_id).await?;

        let created = self.blog_post_repo
            .create(BlogPost::new(
                new_post.title,
                new_post.content,
                author_id,
                new_post.comments,
            ))
            .await?;

        let id = created.id.ok_or_else(|| {
            AppError::InternalError("Created blog post has no id".to_string())
        })?;
        log::info!("게시글 생성: {} (작성자 {})", id.to_hex(), author_id.to_hex());

        Ok(BlogPostResponse::from(self.find_populated(&id).await?))
    }

    /// 게시글 부분 수정
    ///
    /// `title`, `content`, `author`만 변경합니다. 작성자를 바꾸는 경우 새 작성자가 존재해야 합니다.
    pub async fn update_blog_post(
        &self,
        path_id: &str,
        request: UpdateBlogPostRequest,
    ) -> AppResult<BlogPostResponse> {
        ensure_ids_match(path_id, request.id.as_deref())?;
        let id = parse_object_id(path_id)?;
        let patch = request.into_patch()?;

        if let Some(author_id) = &patch.author {
            self.ensure_author_exists(author_id).await?;
        }

        self.blog_post_repo
            .update(&id, &patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

        Ok(BlogPostResponse::from(self.find_populated(&id).await?))
    }

    /// 게시글 삭제. 이미 없는 게시글도 성공으로 처리합니다.
    pub async fn delete_blog_post(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id)?;

        if self.blog_post_repo.delete(&id).await? {
            log::info!("게시글 삭제: {}", id.to_hex());
        }

        Ok(())
    }

    async fn find_populated(&self, id: &ObjectId) -> AppResult<PopulatedBlogPost> {
        self.blog_post_repo
            .find_by_id_populated(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
    }

    async fn ensure_author_exists(&self, author_id: &ObjectId) -> AppResult<()> {
        if self.author_repo.find_by_id(author_id).await?.is_none() {
            log::warn!("{}: {}", AUTHOR_DOES_NOT_EXIST, author_id.to_hex());
            return Err(AppError::ValidationError(AUTHOR_DOES_NOT_EXIST.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::authors::author::Author;
    use crate::repositories::memory::InMemoryStore;

    async fn setup() -> (BlogPostService, Arc<InMemoryStore>, String) {
        let store = Arc::new(InMemoryStore::new());
        let author = AuthorRepository::create(
            store.as_ref(),
            Author::new("Grace".to_string(), "Hopper".to_string(), "grace".to_string()),
        )
        .await
        .unwrap();
        let author_id = author.id.unwrap().to_hex();

        (BlogPostService::new(store.clone(), store.clone()), store, author_id)
    }

    fn create_request(author_id: &str) -> CreateBlogPostRequest {
        CreateBlogPostRequest {
            title: Some("Compilers".to_string()),
            content: Some("On the first compiler".to_string()),
            author_id: Some(author_id.to_string()),
            comments: Vec::new(),
        }
    }

    #[actix_web::test]
    async fn test_create_blog_post_populates_author() {
        let (service, _, author_id) = setup().await;

        let created = service.create_blog_post(create_request(&author_id)).await.unwrap();

        assert_eq!(created.author, "Grace Hopper");
        assert_eq!(created.title, "Compilers");
        assert_eq!(service.get_blog_post(&created.id).await.unwrap(), created);
    }

    #[actix_web::test]
    async fn test_create_blog_post_with_unknown_author() {
        let (service, _, _) = setup().await;

        for author_id in [ObjectId::new().to_hex(), "garbage".to_string()] {
            let result = service.create_blog_post(create_request(&author_id)).await;
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }

        assert!(service.list_blog_posts().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_get_unknown_blog_post_is_not_found() {
        let (service, _, _) = setup().await;

        let result = service.get_blog_post(&ObjectId::new().to_hex()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_blog_post_changes_author() {
        let (service, store, author_id) = setup().await;
        let created = service.create_blog_post(create_request(&author_id)).await.unwrap();
        let ada = AuthorRepository::create(
            store.as_ref(),
            Author::new("Ada".to_string(), "Lovelace".to_string(), "ada".to_string()),
        )
        .await
        .unwrap();

        let request = UpdateBlogPostRequest {
            id: Some(created.id.clone()),
            title: Some("Engines".to_string()),
            content: None,
            author_id: ada.id_string(),
        };
        let updated = service.update_blog_post(&created.id, request).await.unwrap();

        assert_eq!(updated.title, "Engines");
        assert_eq!(updated.content, "On the first compiler");
        assert_eq!(updated.author, "Ada Lovelace");
    }

    #[actix_web::test]
    async fn test_update_blog_post_with_unknown_author_is_rejected() {
        let (service, _, author_id) = setup().await;
        let created = service.create_blog_post(create_request(&author_id)).await.unwrap();

        let request = UpdateBlogPostRequest {
            id: Some(created.id.clone()),
            author_id: Some(ObjectId::new().to_hex()),
            ..Default::default()
        };

        assert!(matches!(
            service.update_blog_post(&created.id, request).await,
            Err(AppError::ValidationError(_))
        ));
        assert_eq!(service.get_blog_post(&created.id).await.unwrap().author, "Grace Hopper");
    }

    #[actix_web::test]
    async fn test_delete_blog_post_is_idempotent() {
        let (service, _, author_id) = setup().await;
        let created = service.create_blog_post(create_request(&author_id)).await.unwrap();

        service.delete_blog_post(&created.id).await.unwrap();
        service.delete_blog_post(&created.id).await.unwrap();

        assert!(service.list_blog_posts().await.unwrap().is_empty());
    }
}

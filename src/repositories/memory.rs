//! In-memory storage implementation
//!
//! MongoDB 없이 서버를 실행하거나 핸들러/서비스를 테스트할 때 사용하는 저장소입니다.
//! 하나의 구조체가 작성자/게시글 trait을 모두 구현하므로 populate 단계에서
//! 작성자 테이블을 직접 참조할 수 있습니다. 프로세스 재시작 시 데이터는 사라집니다.
//!
//! 두 테이블을 함께 잠글 때는 항상 authors → posts 순서로 잠급니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::authors::author::{Author, AuthorPatch};
use crate::domain::entities::blog_posts::blog_post::{BlogPost, BlogPostPatch, PopulatedBlogPost};
use crate::repositories::authors::author_repo::{
    AuthorRepository, AUTHOR_ALREADY_EXISTS, USER_NAME_IN_USE,
};
use crate::repositories::blog_posts::BlogPostRepository;

#[derive(Default)]
pub struct InMemoryStore {
    authors: RwLock<Vec<Author>>,
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn populate(post: &BlogPost, authors: &[Author]) -> PopulatedBlogPost {
        PopulatedBlogPost {
            post: post.clone(),
            author: authors
                .iter()
                .find(|author| author.id == Some(post.author))
                .cloned(),
        }
    }
}

#[async_trait]
impl AuthorRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Author>> {
        Ok(self.authors.read().await.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Author>> {
        let authors = self.authors.read().await;
        Ok(authors.iter().find(|author| author.id == Some(*id)).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Author>> {
        let authors = self.authors.read().await;
        Ok(authors.iter().find(|author| author.user_name == user_name).cloned())
    }

    async fn create(&self, mut author: Author) -> AppResult<Author> {
        let mut authors = self.authors.write().await;

        // 유니크 인덱스와 같은 보장을 쓰기 락 안에서 수행
        if authors.iter().any(|existing| existing.user_name == author.user_name) {
            return Err(AppError::ValidationError(AUTHOR_ALREADY_EXISTS.to_string()));
        }

        author.id = Some(ObjectId::new());
        authors.push(author.clone());

        Ok(author)
    }

    async fn update(&self, id: &ObjectId, patch: &AuthorPatch) -> AppResult<Option<Author>> {
        let mut authors = self.authors.write().await;

        if let Some(user_name) = &patch.user_name {
            let taken = authors
                .iter()
                .any(|other| other.id != Some(*id) && &other.user_name == user_name);
            if taken {
                return Err(AppError::ValidationError(USER_NAME_IN_USE.to_string()));
            }
        }

        let updated = authors
            .iter_mut()
            .find(|author| author.id == Some(*id))
            .map(|author| {
                patch.apply(author);
                author.clone()
            });

        Ok(updated)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut authors = self.authors.write().await;
        let before = authors.len();
        authors.retain(|author| author.id != Some(*id));

        Ok(authors.len() < before)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryStore {
    async fn find_all_populated(&self) -> AppResult<Vec<PopulatedBlogPost>> {
        let authors = self.authors.read().await;
        let posts = self.posts.read().await;

        Ok(posts
            .iter()
            .map(|post| Self::populate(post, &authors))
            .collect())
    }

    async fn find_by_id_populated(&self, id: &ObjectId) -> AppResult<Option<PopulatedBlogPost>> {
        let authors = self.authors.read().await;
        let posts = self.posts.read().await;

        Ok(posts
            .iter()
            .find(|post| post.id == Some(*id))
            .map(|post| Self::populate(post, &authors)))
    }

    async fn create(&self, mut post: BlogPost) -> AppResult<BlogPost> {
        let mut posts = self.posts.write().await;

        post.id = Some(ObjectId::new());
        posts.push(post.clone());

        Ok(post)
    }

    async fn update(&self, id: &ObjectId, patch: &BlogPostPatch) -> AppResult<Option<BlogPost>> {
        let mut posts = self.posts.write().await;

        Ok(posts
            .iter_mut()
            .find(|post| post.id == Some(*id))
            .map(|post| {
                patch.apply(post);
                post.clone()
            }))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.id != Some(*id));

        Ok(posts.len() < before)
    }

    async fn delete_by_author(&self, author_id: &ObjectId) -> AppResult<u64> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.author != *author_id);

        Ok((before - posts.len()) as u64)
    }
}

//! # 게시글 리포지토리 구현
//!
//! 게시글 엔티티의 데이터 액세스 계층입니다.
//! 작성자 참조 해석(populate)은 암묵적인 훅이 아니라
//! `find_all_populated` / `find_by_id_populated`라는 명시적 연산으로 제공합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::authors::author::Author;
use crate::domain::entities::blog_posts::blog_post::{BlogPost, BlogPostPatch, PopulatedBlogPost};
use crate::repositories::authors::MongoAuthorRepository;

/// 게시글 저장소 인터페이스
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// 모든 게시글을 작성자 정보와 함께 조회합니다.
    async fn find_all_populated(&self) -> AppResult<Vec<PopulatedBlogPost>>;

    /// 단일 게시글을 작성자 정보와 함께 조회합니다.
    async fn find_by_id_populated(&self, id: &ObjectId) -> AppResult<Option<PopulatedBlogPost>>;

    async fn create(&self, post: BlogPost) -> AppResult<BlogPost>;

    async fn update(&self, id: &ObjectId, patch: &BlogPostPatch) -> AppResult<Option<BlogPost>>;

    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;

    /// 작성자의 모든 게시글을 삭제하고 삭제된 개수를 반환합니다.
    async fn delete_by_author(&self, author_id: &ObjectId) -> AppResult<u64>;
}

/// `$lookup` 결과가 담기는 임시 필드
const AUTHOR_LOOKUP_FIELD: &str = "authorDocs";

/// MongoDB 기반 게시글 리포지토리
///
/// - **컬렉션명**: `blogposts`
/// - **인덱스**: author(오름차순, cascade 삭제 및 `$lookup`용), created(내림차순)
pub struct MongoBlogPostRepository {
    db: Arc<Database>,
}

impl MongoBlogPostRepository {
    pub const COLLECTION: &'static str = "blogposts";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<BlogPost> {
        self.db.collection::<BlogPost>(Self::COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let author_index = IndexModel::builder()
            .keys(doc! { "author": 1 })
            .options(IndexOptions::builder()
                .name("author_asc".to_string())
                .build())
            .build();

        let created_index = IndexModel::builder()
            .keys(doc! { "created": -1 })
            .options(IndexOptions::builder()
                .name("created_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([author_index, created_index])
            .await?;

        Ok(())
    }

    /// 필터에 맞는 게시글을 `$lookup`으로 작성자와 결합합니다.
    async fn aggregate_populated(&self, filter: Document) -> AppResult<Vec<PopulatedBlogPost>> {
        let documents: Vec<Document> = self.collection()
            .aggregate(populate_pipeline(filter))
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(into_populated).collect()
    }
}

fn populate_pipeline(filter: Document) -> Vec<Document> {
    vec![
        doc! { "$match": filter },
        doc! {
            "$lookup": {
                "from": MongoAuthorRepository::COLLECTION,
                "localField": "author",
                "foreignField": "_id",
                "as": AUTHOR_LOOKUP_FIELD,
            }
        },
    ]
}

fn into_populated(mut document: Document) -> AppResult<PopulatedBlogPost> {
    let author = match document.remove(AUTHOR_LOOKUP_FIELD) {
        Some(Bson::Array(authors)) => authors
            .into_iter()
            .next()
            .map(bson::from_bson::<Author>)
            .transpose()
            .context("Failed to decode populated author")?,
        _ => None,
    };

    let post = bson::from_document::<BlogPost>(document)
        .context("Failed to decode blog post")?;

    Ok(PopulatedBlogPost { post, author })
}

#[async_trait]
impl BlogPostRepository for MongoBlogPostRepository {
    async fn find_all_populated(&self) -> AppResult<Vec<PopulatedBlogPost>> {
        self.aggregate_populated(doc! {}).await
    }

    async fn find_by_id_populated(&self, id: &ObjectId) -> AppResult<Option<PopulatedBlogPost>> {
        let mut posts = self.aggregate_populated(doc! { "_id": *id }).await?;
        Ok(posts.pop())
    }

    async fn create(&self, mut post: BlogPost) -> AppResult<BlogPost> {
        let result = self.collection()
            .insert_one(&post)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("Inserted blog post id is not an ObjectId".to_string())
        })?;
        post.id = Some(id);

        Ok(post)
    }

    async fn update(&self, id: &ObjectId, patch: &BlogPostPatch) -> AppResult<Option<BlogPost>> {
        if patch.is_empty() {
            return Ok(self.collection().find_one(doc! { "_id": *id }).await?);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection()
            .find_one_and_update(
                doc! { "_id": *id },
                doc! { "$set": patch.to_set_document() },
            )
            .with_options(options)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn delete_by_author(&self, author_id: &ObjectId) -> AppResult<u64> {
        let result = self.collection()
            .delete_many(doc! { "author": *author_id })
            .await?;

        Ok(result.deleted_count)
    }
}

//! # 작성자 리포지토리 구현
//!
//! 작성자 엔티티의 데이터 액세스 계층입니다.
//! 서비스 계층은 [`AuthorRepository`] trait 객체만 알고 있으며,
//! 실제 구현(MongoDB 또는 메모리)은 애플리케이션 시작 시 주입됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::authors::author::{Author, AuthorPatch};

pub const AUTHOR_ALREADY_EXISTS: &str = "Author already exists";
pub const USER_NAME_IN_USE: &str = "Username already in use";

/// 작성자 저장소 인터페이스
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Author>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Author>>;

    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Author>>;

    /// 새 작성자를 저장하고 ID가 할당된 엔티티를 반환합니다.
    ///
    /// `userName`이 이미 존재하면 `ValidationError`를 반환합니다.
    async fn create(&self, author: Author) -> AppResult<Author>;

    /// 패치를 적용하고 수정된 작성자를 반환합니다. 없는 작성자는 `Ok(None)`입니다.
    async fn update(&self, id: &ObjectId, patch: &AuthorPatch) -> AppResult<Option<Author>>;

    /// 삭제된 문서가 있으면 `true`를 반환합니다.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// MongoDB 기반 작성자 리포지토리
///
/// - **컬렉션명**: `authors`
/// - **인덱스**: userName(unique)
///
/// 유니크 인덱스가 동시 생성 경쟁에 대한 최종 보장 수단이며,
/// 서비스 계층의 사전 중복 검사는 빠른 실패를 위한 것입니다.
pub struct MongoAuthorRepository {
    db: Arc<Database>,
}

impl MongoAuthorRepository {
    pub const COLLECTION: &'static str = "authors";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Author> {
        self.db.collection::<Author>(Self::COLLECTION)
    }

    /// 작성자 컬렉션 인덱스 생성
    ///
    /// 이미 중복된 userName이 저장되어 있다면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_name_index = IndexModel::builder()
            .keys(doc! { "userName": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("userName_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([user_name_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for MongoAuthorRepository {
    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let authors = self.collection()
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(authors)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Author>> {
        Ok(self.collection().find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Author>> {
        Ok(self.collection().find_one(doc! { "userName": user_name }).await?)
    }

    async fn create(&self, mut author: Author) -> AppResult<Author> {
        let result = self.collection()
            .insert_one(&author)
            .await
            .map_err(|e| duplicate_key_or_database(e, AUTHOR_ALREADY_EXISTS))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("Inserted author id is not an ObjectId".to_string())
        })?;
        author.id = Some(id);

        Ok(author)
    }

    async fn update(&self, id: &ObjectId, patch: &AuthorPatch) -> AppResult<Option<Author>> {
        // 빈 $set은 MongoDB에서 거부되므로 현재 상태를 그대로 반환
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": *id },
                doc! { "$set": patch.to_set_document() },
            )
            .with_options(options)
            .await
            .map_err(|e| duplicate_key_or_database(e, USER_NAME_IN_USE))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 유니크 인덱스 위반은 400으로, 그 외는 데이터베이스 에러로 변환합니다.
fn duplicate_key_or_database(error: mongodb::error::Error, message: &str) -> AppError {
    if is_duplicate_key(&error) {
        log::warn!("userName 유니크 인덱스 위반: {}", error);
        AppError::ValidationError(message.to_string())
    } else {
        AppError::from(error)
    }
}

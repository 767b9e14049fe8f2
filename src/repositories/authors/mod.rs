//! 작성자 데이터 액세스 계층
//!
//! [`AuthorRepository`] trait과 MongoDB 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::authors::{AuthorRepository, MongoAuthorRepository};
//!
//! let repo: Arc<dyn AuthorRepository> = Arc::new(MongoAuthorRepository::new(database));
//! let author = repo.find_by_user_name("ada").await?;
//! ```

pub mod author_repo;

pub use author_repo::{AuthorRepository, MongoAuthorRepository};

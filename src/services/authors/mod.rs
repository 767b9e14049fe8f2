//! 작성자 관리 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::authors::AuthorService;
//!
//! let service = AuthorService::new(author_repo, blog_post_repo);
//! let authors = service.list_authors().await?;
//! ```

pub mod author_service;

pub use author_service::AuthorService;

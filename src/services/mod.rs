//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 생성자로 주입받습니다.
//! 핸들러는 `web::Data<AuthorService>`, `web::Data<BlogPostService>`로 서비스를 받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{authors::AuthorService, blog_posts::BlogPostService};
//!
//! let author_service = AuthorService::new(author_repo.clone(), blog_post_repo.clone());
//! let blog_post_service = BlogPostService::new(author_repo, blog_post_repo);
//! ```

pub mod authors;
pub mod blog_posts;

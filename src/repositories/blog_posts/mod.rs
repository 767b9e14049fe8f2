//! 게시글 데이터 액세스 계층
//!
//! [`BlogPostRepository`] trait과 MongoDB 구현체를 제공합니다.

pub mod blog_post_repo;

pub use blog_post_repo::{BlogPostRepository, MongoBlogPostRepository};

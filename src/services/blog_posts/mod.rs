//! 게시글 관리 서비스 모듈

pub mod blog_post_service;

pub use blog_post_service::BlogPostService;

//! Blog Posts Entity Module
//!
//! 게시글, 댓글 값 객체, 게시글 패치 및 populate된 조회 모델을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::blog_posts::blog_post::{BlogPost, Comment};
//!
//! let post = BlogPost::new(
//!     "Hello".to_string(),
//!     "First post".to_string(),
//!     author_id,
//!     vec![Comment { content: "Nice!".to_string() }],
//! );
//! ```

pub mod blog_post;

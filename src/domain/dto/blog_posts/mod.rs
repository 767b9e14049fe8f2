//! 게시글 API의 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{CommentRequest, CreateBlogPostRequest, NewBlogPost, UpdateBlogPostRequest};
pub use response::{BlogPostResponse, CommentResponse};

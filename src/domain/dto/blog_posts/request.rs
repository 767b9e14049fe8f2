//! 게시글 요청 DTO
//!
//! 작성자 참조는 `author_id` 키로 받으며 `authorId`, `author`도 허용합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::require_field;
use crate::domain::entities::blog_posts::blog_post::{BlogPostPatch, Comment};
use crate::utils::object_id::parse_object_id;

/// 게시글 생성 시 함께 등록하는 댓글
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "Comment `content` must not be empty"))]
    pub content: String,
}

impl From<CommentRequest> for Comment {
    fn from(request: CommentRequest) -> Self {
        Comment {
            content: request.content,
        }
    }
}

/// 게시글 생성 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateBlogPostRequest {
    #[validate(
        required(message = "Missing `title` in request body"),
        length(min = 1, message = "`title` must not be empty")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Missing `content` in request body"),
        length(min = 1, message = "`content` must not be empty")
    )]
    pub content: Option<String>,

    #[serde(rename = "author_id", alias = "authorId", alias = "author")]
    #[validate(required(message = "Missing `author_id` in request body"))]
    pub author_id: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub comments: Vec<CommentRequest>,
}

/// 검증을 통과한 게시글 생성 입력
///
/// 작성자 존재 여부는 아직 확인되지 않은 상태입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub comments: Vec<Comment>,
}

impl CreateBlogPostRequest {
    pub fn into_new_post(self) -> AppResult<NewBlogPost> {
        Ok(NewBlogPost {
            title: require_field(self.title, "title")?,
            content: require_field(self.content, "content")?,
            author_id: require_field(self.author_id, "author_id")?,
            comments: self.comments.into_iter().map(Comment::from).collect(),
        })
    }
}

/// 게시글 수정 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBlogPostRequest {
    pub id: Option<String>,

    #[validate(length(min = 1, message = "`title` must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "`content` must not be empty"))]
    pub content: Option<String>,

    #[serde(rename = "author_id", alias = "authorId", alias = "author")]
    pub author_id: Option<String>,
}

impl UpdateBlogPostRequest {
    /// 허용된 필드만 패치로 옮깁니다. 작성자 id 형식이 잘못되면 400입니다.
    pub fn into_patch(self) -> AppResult<BlogPostPatch> {
        let author = self
            .author_id
            .as_deref()
            .map(parse_object_id)
            .transpose()?;

        Ok(BlogPostPatch {
            title: self.title,
            content: self.content,
            author,
        })
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::blog_posts::blog_post::{Comment, PopulatedBlogPost};

/// 댓글 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub content: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            content: comment.content,
        }
    }
}

/// 게시글 응답 DTO
///
/// 작성자는 참조 id 대신 `"firstName lastName"` 표시 문자열로 내보냅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub comments: Vec<CommentResponse>,
    pub created: DateTime<Utc>,
}

impl From<PopulatedBlogPost> for BlogPostResponse {
    fn from(populated: PopulatedBlogPost) -> Self {
        let author = populated.author_name();
        let post = populated.post;

        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: post.title,
            content: post.content,
            author,
            comments: post.comments.into_iter().map(CommentResponse::from).collect(),
            created: DateTime::from_timestamp_millis(post.created.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::authors::author::Author;
    use crate::domain::entities::blog_posts::blog_post::BlogPost;

    #[test]
    fn test_serialized_post_flattens_author() {
        let author_id = ObjectId::new();
        let mut post = BlogPost::new(
            "Title".to_string(),
            "Body".to_string(),
            author_id,
            vec![Comment { content: "hi".to_string() }],
        );
        post.id = Some(ObjectId::new());
        let author = Author {
            id: Some(author_id),
            ..Author::new("Grace".to_string(), "Hopper".to_string(), "grace".to_string())
        };

        let response = BlogPostResponse::from(PopulatedBlogPost {
            post: post.clone(),
            author: Some(author),
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["author"], "Grace Hopper");
        assert_eq!(json["id"], post.id_string().unwrap());
        assert_eq!(json["comments"][0]["content"], "hi");
        assert_eq!(
            response.created.timestamp_millis(),
            post.created.timestamp_millis()
        );
        assert!(json.get("author_id").is_none());
    }
}

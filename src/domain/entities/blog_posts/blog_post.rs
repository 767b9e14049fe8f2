//! BlogPost Entity Implementation
//!
//! 게시글 엔티티, 게시글에 포함되는 댓글 값 객체,
//! 부분 수정 패치와 작성자 정보가 결합된 조회 모델을 정의합니다.

use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};
use crate::domain::entities::authors::author::Author;

/// 게시글 엔티티
///
/// 작성자는 포함(containment)이 아닌 참조(`author` ObjectId)로 연결됩니다.
/// 댓글은 별도 식별자 없이 게시글 문서 안에 순서대로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    /// 작성자 참조
    pub author: ObjectId,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// 생성 시간. 필드가 없는 기존 문서는 Unix epoch로 읽습니다.
    #[serde(default = "missing_created")]
    pub created: DateTime,
}

impl BlogPost {
    pub fn new(title: String, content: String, author: ObjectId, comments: Vec<Comment>) -> Self {
        Self {
            id: None,
            title,
            content,
            author,
            comments,
            created: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

fn missing_created() -> DateTime {
    DateTime::from_millis(0)
}

/// 게시글에 포함되는 댓글
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
}

/// 게시글 부분 수정 패치
///
/// `title`, `content`, `author`만 변경할 수 있습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<ObjectId>,
}

impl BlogPostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    pub fn apply(&self, post: &mut BlogPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(author) = self.author {
            post.author = author;
        }
    }

    /// MongoDB `$set` 연산자에 들어갈 문서를 생성합니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();

        if let Some(title) = &self.title {
            set.insert("title", title.as_str());
        }
        if let Some(content) = &self.content {
            set.insert("content", content.as_str());
        }
        if let Some(author) = self.author {
            set.insert("author", author);
        }

        set
    }
}

/// 작성자 참조가 해석된 게시글
///
/// 조회 경로에서 명시적인 populate 단계를 거쳐 만들어집니다.
/// 작성자가 삭제되어 참조를 해석할 수 없으면 `author`는 `None`입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedBlogPost {
    pub post: BlogPost,
    pub author: Option<Author>,
}

impl PopulatedBlogPost {
    pub fn author_name(&self) -> String {
        self.author
            .as_ref()
            .map(Author::display_name)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_missing_comments_and_created_get_fixed_defaults() {
        let author = ObjectId::new();
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "Hello",
            "content": "World",
            "author": author,
        };

        let post: BlogPost = mongodb::bson::from_document(document.clone()).unwrap();
        let reread: BlogPost = mongodb::bson::from_document(document).unwrap();

        assert_eq!(post.author, author);
        assert!(post.comments.is_empty());
        assert_eq!(post.created.timestamp_millis(), 0);
        assert_eq!(post.created, reread.created);
    }

    #[test]
    fn test_patch_renders_only_allowed_fields() {
        let author = ObjectId::new();
        let patch = BlogPostPatch {
            title: Some("New title".to_string()),
            author: Some(author),
            ..Default::default()
        };

        assert_eq!(
            patch.to_set_document(),
            doc! { "title": "New title", "author": author }
        );
    }

    #[test]
    fn test_patch_apply() {
        let mut post = BlogPost::new(
            "Old".to_string(),
            "Body".to_string(),
            ObjectId::new(),
            vec![Comment { content: "first!".to_string() }],
        );

        BlogPostPatch {
            content: Some("New body".to_string()),
            ..Default::default()
        }
        .apply(&mut post);

        assert_eq!(post.title, "Old");
        assert_eq!(post.content, "New body");
        assert_eq!(post.comments.len(), 1);
    }

    #[test]
    fn test_author_name_for_unresolved_author_is_empty() {
        let populated = PopulatedBlogPost {
            post: BlogPost::new("t".to_string(), "c".to_string(), ObjectId::new(), Vec::new()),
            author: None,
        };

        assert_eq!(populated.author_name(), "");
    }
}

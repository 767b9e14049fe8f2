//! Author Entity Implementation
//!
//! 블로그 게시글 작성자 엔티티와 부분 수정용 패치 객체입니다.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// 작성자 엔티티
///
/// `authors` 컬렉션의 문서와 1:1로 매핑됩니다.
/// `userName`은 시스템 전체에서 유일하며 MongoDB 유니크 인덱스로 보장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    /// 사용자 이름 (unique)
    pub user_name: String,
}

impl Author {
    /// 저장 전 상태의 새 작성자를 생성합니다. ID는 저장소에서 할당됩니다.
    pub fn new(first_name: String, last_name: String, user_name: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            user_name,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 게시글 응답에 사용하는 표시 이름 (`"firstName lastName"`)
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// 작성자 부분 수정 패치
///
/// 수정 가능한 필드(`firstName`, `lastName`, `userName`)만 담을 수 있습니다.
/// `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.user_name.is_none()
    }

    /// 메모리상의 작성자에 패치를 적용합니다.
    pub fn apply(&self, author: &mut Author) {
        if let Some(first_name) = &self.first_name {
            author.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            author.last_name = last_name.clone();
        }
        if let Some(user_name) = &self.user_name {
            author.user_name = user_name.clone();
        }
    }

    /// MongoDB `$set` 연산자에 들어갈 문서를 생성합니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();

        if let Some(first_name) = &self.first_name {
            set.insert("firstName", first_name.as_str());
        }
        if let Some(last_name) = &self.last_name {
            set.insert("lastName", last_name.as_str());
        }
        if let Some(user_name) = &self.user_name {
            set.insert("userName", user_name.as_str());
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn sample_author() -> Author {
        Author::new("Ada".to_string(), "Lovelace".to_string(), "ada".to_string())
    }

    #[test]
    fn test_display_name_joins_and_trims() {
        assert_eq!(sample_author().display_name(), "Ada Lovelace");

        let mononym = Author::new("Plato".to_string(), String::new(), "plato".to_string());
        assert_eq!(mononym.display_name(), "Plato");
    }

    #[test]
    fn test_bson_field_names_are_camel_case() {
        let document = mongodb::bson::to_document(&sample_author()).unwrap();

        assert_eq!(
            document,
            doc! { "firstName": "Ada", "lastName": "Lovelace", "userName": "ada" }
        );
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut author = sample_author();
        let patch = AuthorPatch {
            last_name: Some("King".to_string()),
            ..Default::default()
        };

        patch.apply(&mut author);

        assert_eq!(author.first_name, "Ada");
        assert_eq!(author.last_name, "King");
        assert_eq!(author.user_name, "ada");
        assert_eq!(patch.to_set_document(), doc! { "lastName": "King" });
    }

    #[test]
    fn test_empty_patch() {
        let patch = AuthorPatch::default();

        assert!(patch.is_empty());
        assert!(patch.to_set_document().is_empty());
    }
}

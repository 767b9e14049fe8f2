use serde::{Deserialize, Serialize};
use crate::domain::entities::authors::author::Author;

/// 작성자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        let Author {
            id,
            first_name,
            last_name,
            user_name,
        } = author;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            user_name,
        }
    }
}

//! 작성자 요청 DTO
//!
//! HTTP 요청 본문을 받아 검증한 뒤 엔티티 또는 패치로 변환합니다.
//! 모든 필드를 `Option`으로 받아 누락된 필드를 역직렬화 실패가 아닌
//! 검증 에러(400)로 보고합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::{require_field, validate_not_blank};
use crate::domain::entities::authors::author::{Author, AuthorPatch};

/// 작성자 생성 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    #[validate(
        required(message = "Missing `firstName` in request body"),
        length(min = 1, message = "`firstName` must not be empty")
    )]
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: Option<String>,

    #[validate(
        required(message = "Missing `lastName` in request body"),
        length(min = 1, message = "`lastName` must not be empty")
    )]
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: Option<String>,

    #[validate(
        required(message = "Missing `userName` in request body"),
        length(min = 1, message = "`userName` must not be empty")
    )]
    #[validate(custom(function = "validate_not_blank"))]
    pub user_name: Option<String>,
}

impl CreateAuthorRequest {
    /// 필수 필드를 확인하고 저장 전 상태의 작성자 엔티티를 만듭니다.
    pub fn into_author(self) -> AppResult<Author> {
        Ok(Author::new(
            require_field(self.first_name, "firstName")?,
            require_field(self.last_name, "lastName")?,
            require_field(self.user_name, "userName")?,
        ))
    }
}

/// 작성자 수정 요청 DTO
///
/// `id`는 경로의 id와 같아야 하며, 나머지 필드는 허용 목록에 있는 것만 패치로 옮겨집니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    pub id: Option<String>,

    #[validate(length(min = 1, message = "`firstName` must not be empty"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "`lastName` must not be empty"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, message = "`userName` must not be empty"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub user_name: Option<String>,
}

impl UpdateAuthorRequest {
    pub fn into_patch(self) -> AuthorPatch {
        AuthorPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            user_name: self.user_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_create_request_reports_missing_field() {
        let request: CreateAuthorRequest =
            serde_json::from_value(serde_json::json!({ "firstName": "Ada", "lastName": "Lovelace" }))
                .unwrap();

        assert!(request.validate().is_err());
        match request.into_author() {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("userName")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_create_request_rejects_empty_strings() {
        let request = CreateAuthorRequest {
            first_name: Some(String::new()),
            last_name: Some("Lovelace".to_string()),
            user_name: Some("ada".to_string()),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_blank_names() {
        let request: CreateAuthorRequest = serde_json::from_value(serde_json::json!({
            "firstName": "  ",
            "lastName": "\t",
            "userName": "blank"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("last_name"));
        assert!(request.into_author().is_err());
    }

    #[test]
    fn test_update_request_rejects_blank_user_name() {
        let request = UpdateAuthorRequest {
            id: Some("abc".to_string()),
            user_name: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_ignores_unknown_fields() {
        let request: UpdateAuthorRequest = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "userName": "countess",
            "_id": "should-not-be-patched",
            "isAdmin": true
        }))
        .unwrap();

        let patch = request.into_patch();
        assert_eq!(
            patch,
            AuthorPatch {
                user_name: Some("countess".to_string()),
                ..Default::default()
            }
        );
    }
}

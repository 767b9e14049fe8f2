//! # ObjectId 유틸리티
//!
//! 요청으로 들어온 id 문자열을 MongoDB ObjectId로 변환하고,
//! 수정 요청의 경로 id와 본문 id가 같은지 검사합니다.

use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};

/// 24자리 16진수 문자열을 ObjectId로 변환합니다.
///
/// # 예제
/// ```rust,ignore
/// let id = parse_object_id("507f1f77bcf86cd799439011")?;
/// assert!(parse_object_id("not-an-id").is_err());
/// ```
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("Invalid id format: `{}`", id)))
}

/// 경로 id와 본문 id가 모두 있고 서로 같은지 확인합니다.
///
/// 일치하지 않으면 400 에러를 반환하며, 호출자는 즉시 처리를 중단해야 합니다.
pub fn ensure_ids_match(path_id: &str, body_id: Option<&str>) -> AppResult<()> {
    match body_id {
        Some(body_id) if !path_id.is_empty() && body_id == path_id => Ok(()),
        _ => Err(AppError::ValidationError(
            "Request path id and request body id must match".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(
            parse_object_id("12345"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_ensure_ids_match() {
        assert!(ensure_ids_match("abc", Some("abc")).is_ok());
        assert!(ensure_ids_match("abc", Some("xyz")).is_err());
        assert!(ensure_ids_match("abc", None).is_err());
        assert!(ensure_ids_match("", Some("")).is_err());
    }
}

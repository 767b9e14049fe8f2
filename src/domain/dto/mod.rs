//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체들을 정의하는 모듈입니다.
//! 응답 DTO로의 `From` 변환이 곧 공개 JSON 표현(serialize)입니다.
//!
//! | 구분 | 모듈 | 역할 |
//! |------|------|------|
//! | 요청 | `*/request` | JSON 본문 역직렬화 + `validator` 검증 + 엔티티/패치 변환 |
//! | 응답 | `*/response` | 엔티티 → 공개 JSON 표현 |

use validator::ValidationError;
use crate::core::errors::{AppError, AppResult};

pub mod authors;
pub mod blog_posts;

/// 필수 필드를 꺼냅니다. 없거나 공백뿐이면 400 검증 에러입니다.
pub(crate) fn require_field(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(AppError::ValidationError(format!("`{}` must not be blank", field))),
        None => Err(AppError::ValidationError(format!("Missing `{}` in request body", field))),
    }
}

/// 공백 문자만으로 이루어진 값 거부
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("value must not be blank".into()));
    }
    Ok(())
}

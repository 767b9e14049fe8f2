//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`object_id`] - 경로/본문 id 파싱 및 일치 검사
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::object_id::{ensure_ids_match, parse_object_id};
//!
//! ensure_ids_match(&path_id, request.id.as_deref())?;
//! let id = parse_object_id(&path_id)?;
//! ```

pub mod object_id;

//! # Domain Layer Module
//!
//! 블로그 도메인의 엔티티와 API 경계 DTO를 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - Author, BlogPost, Comment, 패치, populate 결과
//! └── dto       - 요청/응답 데이터 계약
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;

//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티들을 정의합니다.
//!
//! ## 컬렉션 구성
//!
//! ```text
//! authors                     blogposts
//! ┌──────────────────┐        ┌─────────────────────────┐
//! │ _id              │◄───────│ author (ObjectId 참조)  │
//! │ firstName        │  1 : N │ title, content          │
//! │ lastName         │        │ comments: [{content}]   │
//! │ userName (unique)│        │ created                 │
//! └──────────────────┘        └─────────────────────────┘
//! ```
//!
//! 작성자와 게시글은 참조로 연결되고, 댓글은 게시글 문서에 포함됩니다.
//! 참조 무결성은 게시글 생성/수정 시점에만 검사하며 외래 키 제약은 없습니다.

pub mod authors;
pub mod blog_posts;

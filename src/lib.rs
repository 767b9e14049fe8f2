//! 블로그 API 서비스 백엔드
//!
//! 작성자(Author)와 게시글(BlogPost)을 관리하는 Rust 기반 REST API 서비스입니다.
//! 게시글은 작성자를 참조하며, 조회 시 작성자 표시 이름으로 채워져 반환됩니다.
//!
//! # Features
//!
//! - **작성자 관리**: 생성, 목록 조회, 부분 수정, 게시글 cascade 삭제
//! - **게시글 관리**: 생성, 목록/단건 조회, 부분 수정, 삭제
//! - **작성자 populate**: MongoDB `$lookup`으로 작성자 이름 채우기
//! - **저장소 주입**: 트레이트 객체 기반 저장소 교체 (MongoDB / 메모리)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (트레이트)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use blog_api::repositories::memory::InMemoryStore;
//! use blog_api::services::blog_posts::BlogPostService;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let service = BlogPostService::new(store.clone(), store);
//! let posts = service.list_blog_posts().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

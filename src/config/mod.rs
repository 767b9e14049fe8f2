//! # Configuration Module
//!
//! 블로그 API 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 한곳에서 읽어 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 저장소 백엔드, Rate Limiting 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, ServerConfig, StorageBackend};
//!
//! let bind_address = ServerConfig::bind_address();
//!
//! if StorageBackend::current() == StorageBackend::MongoDb {
//!     let uri = DatabaseConfig::uri();
//! }
//! ```

pub mod data_config;

pub use data_config::*;

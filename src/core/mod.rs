//! 애플리케이션 공통 핵심 모듈
//!
//! 모든 계층에서 공유하는 에러 타입과 결과 타입 별칭을 제공합니다.

pub mod errors;

pub use errors::*;

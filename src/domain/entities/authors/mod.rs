//! Authors Entity Module
//!
//! 작성자 도메인 엔티티와 부분 수정 패치를 정의합니다.

pub mod author;

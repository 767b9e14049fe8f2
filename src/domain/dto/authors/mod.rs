//! 작성자 API의 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{CreateAuthorRequest, UpdateAuthorRequest};
pub use response::AuthorResponse;

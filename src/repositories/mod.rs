//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 저장소 trait 객체(`Arc<dyn AuthorRepository>`,
//! `Arc<dyn BlogPostRepository>`)만 의존합니다. 구현체는 시작 시 선택되어 주입됩니다.
//!
//! | 구현 | 용도 |
//! |------|------|
//! | [`authors::MongoAuthorRepository`], [`blog_posts::MongoBlogPostRepository`] | 운영 저장소 (MongoDB) |
//! | [`memory::InMemoryStore`] | `STORAGE_BACKEND=memory` 실행 및 테스트 대역 |

pub mod authors;
pub mod blog_posts;
pub mod memory;

pub use authors::AuthorRepository;
pub use blog_posts::BlogPostRepository;

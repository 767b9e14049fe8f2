//! # HTTP Handlers Module
//!
//! REST API 엔드포인트의 요청/응답 처리를 담당합니다.
//! 핸들러는 경로/본문 추출과 `validator` 검증, 상태 코드 선택만 수행하고
//! 비즈니스 규칙은 서비스 계층에 위임합니다.
//!
//! ```text
//! HTTP Request ─► Handler (추출/검증) ─► Service (규칙) ─► Repository (저장소)
//!                    ▲                        │
//!                    └──── Result<HttpResponse, AppError> ◄┘
//! ```
//!
//! 서비스는 `web::Data`로 주입되므로 핸들러는 저장소 구현을 알지 못합니다.

pub mod authors;
pub mod blog_posts;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use actix_web::web;
    use crate::domain::entities::authors::author::Author;
    use crate::domain::entities::blog_posts::blog_post::BlogPost;
    use crate::repositories::memory::InMemoryStore;
    use crate::repositories::{AuthorRepository, BlogPostRepository};
    use crate::services::authors::AuthorService;
    use crate::services::blog_posts::BlogPostService;
    use crate::utils::object_id::parse_object_id;

    /// 메모리 저장소를 주입한 서비스 묶음
    pub struct TestServices {
        store: Arc<InMemoryStore>,
        authors: web::Data<AuthorService>,
        blog_posts: web::Data<BlogPostService>,
    }

    impl TestServices {
        pub fn new() -> Self {
            let store = Arc::new(InMemoryStore::new());

            Self {
                authors: web::Data::new(AuthorService::new(store.clone(), store.clone())),
                blog_posts: web::Data::new(BlogPostService::new(store.clone(), store.clone())),
                store,
            }
        }

        pub fn register(&self, cfg: &mut web::ServiceConfig) {
            cfg.app_data(self.authors.clone())
                .app_data(self.blog_posts.clone());
        }

        pub async fn seed_author(&self, first_name: &str, last_name: &str, user_name: &str) -> String {
            let author = Author::new(
                first_name.to_string(),
                last_name.to_string(),
                user_name.to_string(),
            );

            AuthorRepository::create(self.store.as_ref(), author)
                .await
                .unwrap()
                .id_string()
                .unwrap()
        }

        pub async fn seed_post(&self, author_id: &str, title: &str) -> String {
            let post = BlogPost::new(
                title.to_string(),
                format!("content of {}", title),
                parse_object_id(author_id).unwrap(),
                Vec::new(),
            );

            BlogPostRepository::create(self.store.as_ref(), post)
                .await
                .unwrap()
                .id_string()
                .unwrap()
        }

        pub async fn store_authors(&self) -> Vec<Author> {
            self.store.find_all().await.unwrap()
        }
    }
}

//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 저장소 백엔드 및 요청 제한 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 값이 없거나 잘못된 경우 기본값을 사용합니다.

use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 사용할 저장소 구현
///
/// `memory`는 MongoDB 없이 서버를 띄울 때 사용하며, 재시작 시 데이터가 사라집니다.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl StorageBackend {
    pub fn current() -> Self {
        Self::from_str(&env::var("STORAGE_BACKEND").unwrap_or_default())
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }

    /// 헬스체크 응답에 표시하는 이름
    pub fn label(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "MongoDB",
            StorageBackend::Memory => "In-memory",
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// CORS 허용 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    pub fn cors_allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI
    ///
    /// `MONGODB_URI`가 우선이며, 없으면 `DATABASE_URL`을 사용합니다.
    pub fn uri() -> String {
        env::var("MONGODB_URI")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "blog_api_dev".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND").ok();
        let burst_size = env::var("RATE_LIMIT_BURST_SIZE").ok();

        Self::parse(per_second.as_deref(), burst_size.as_deref())
    }

    pub fn parse(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = match per_second.map(str::parse::<u64>) {
            Some(Ok(value)) if value > 0 => value,
            Some(_) => {
                log::error!(
                    "RATE_LIMIT_PER_SECOND 파싱 실패. 기본값 {} 사용",
                    Self::DEFAULT_PER_SECOND
                );
                Self::DEFAULT_PER_SECOND
            }
            None => Self::DEFAULT_PER_SECOND,
        };

        let burst_size = match burst_size.map(str::parse::<u32>) {
            Some(Ok(value)) if value > 0 => value,
            Some(_) => {
                log::error!(
                    "RATE_LIMIT_BURST_SIZE 파싱 실패. 기본값 {} 사용",
                    Self::DEFAULT_BURST_SIZE
                );
                Self::DEFAULT_BURST_SIZE
            }
            None => Self::DEFAULT_BURST_SIZE,
        };

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("STAGE"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str(" In-Memory "), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str(""), StorageBackend::MongoDb);
    }

    #[test]
    fn test_storage_backend_label() {
        assert_eq!(StorageBackend::MongoDb.label(), "MongoDB");
        assert_eq!(StorageBackend::Memory.label(), "In-memory");
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = ServerConfig::parse_origins("http://a.test, ,http://b.test ,");

        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_rate_limit_parse() {
        assert_eq!(
            RateLimitConfig::parse(Some("20"), Some("40")),
            RateLimitConfig { per_second: 20, burst_size: 40 }
        );
        assert_eq!(
            RateLimitConfig::parse(None, None),
            RateLimitConfig { per_second: 100, burst_size: 200 }
        );
        assert_eq!(
            RateLimitConfig::parse(Some("abc"), Some("0")),
            RateLimitConfig { per_second: 100, burst_size: 200 }
        );
    }
}

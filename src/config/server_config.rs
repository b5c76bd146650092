//! 서버 및 실행 프로필 설정 관리 모듈
//!
//! 바인딩 주소와 `.env` 파일 선택을 담당합니다.

use std::env;

/// `PROFILE` 환경 변수로 결정되는 실행 프로필
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Development,
    Production,
    Default,
}

impl Profile {
    /// 현재 프로세스의 프로필 (기본값: dev)
    pub fn current() -> Self {
        Self::from_str(&env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Profile::Development,
            "prod" | "production" => Profile::Production,
            _ => Profile::Default,
        }
    }

    /// 프로필에 대응하는 dotenv 파일 이름
    pub fn env_file(&self) -> &'static str {
        match self {
            Profile::Development => ".env.dev",
            Profile::Production => ".env.prod",
            Profile::Default => ".env",
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

    pub fn bind_address() -> (String, u16) {
        (Self::host(), Self::port())
    }
}

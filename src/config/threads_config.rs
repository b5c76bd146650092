//! # Threads OAuth Configuration Module
//!
//! Threads 앱 자격 증명과 Graph API 엔드포인트 설정을 관리합니다.
//! 설정은 서버 시작 시 한 번 로드되어 검증된 뒤, 서비스 생성 시 명시적으로 주입됩니다.
//! 핸들러 내부에서 환경 변수를 직접 읽지 않으므로 테스트에서 자유롭게 대체할 수 있습니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export THREADS_APP_ID="1234567890"
//! export THREADS_APP_SECRET="your-threads-app-secret"
//! export THREADS_REDIRECT_URI="https://yourdomain.com/api/threads/callback"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export THREADS_TOKEN_URI="https://graph.threads.net/oauth/access_token"
//! export THREADS_ME_URI="https://graph.threads.net/v1.0/me"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::ThreadsOAuthConfig;
//!
//! let config = ThreadsOAuthConfig::from_env()?;
//! log::info!("Threads redirect URI: {}", config.redirect_uri);
//! ```

use std::env;
use std::fmt;

use secrecy::Secret;
use validator::Validate;

use crate::errors::errors::{AppError, AppResult};

pub const APP_ID_VAR: &str = "THREADS_APP_ID";
pub const APP_SECRET_VAR: &str = "THREADS_APP_SECRET";
pub const REDIRECT_URI_VAR: &str = "THREADS_REDIRECT_URI";
pub const TOKEN_URI_VAR: &str = "THREADS_TOKEN_URI";
pub const ME_URI_VAR: &str = "THREADS_ME_URI";

pub const DEFAULT_TOKEN_URI: &str = "https://graph.threads.net/oauth/access_token";
pub const DEFAULT_ME_URI: &str = "https://graph.threads.net/v1.0/me";

/// 검증 전 원시 설정값
#[derive(Debug, Validate)]
struct RawThreadsSettings {
    #[validate(length(min = 1, message = "THREADS_APP_ID must be set"))]
    app_id: String,

    #[validate(length(min = 1, message = "THREADS_APP_SECRET must be set"))]
    app_secret: String,

    #[validate(url(message = "THREADS_REDIRECT_URI must be an absolute URL"))]
    redirect_uri: String,

    #[validate(url(message = "THREADS_TOKEN_URI must be an absolute URL"))]
    token_uri: String,

    #[validate(url(message = "THREADS_ME_URI must be an absolute URL"))]
    me_uri: String,
}

/// Threads OAuth 2.0 클라이언트 설정
///
/// `app_secret`은 `secrecy::Secret`으로 감싸져 있어 `Debug` 출력이나 로그에 노출되지 않습니다.
/// 토큰 교환 요청 본문을 만들 때만 `expose_secret()`으로 꺼냅니다.
pub struct ThreadsOAuthConfig {
    pub app_id: String,
    pub app_secret: Secret<String>,
    pub redirect_uri: String,
    pub token_uri: String,
    pub me_uri: String,
}

impl ThreadsOAuthConfig {
    /// 프로세스 환경 변수에서 설정을 로드하고 검증합니다.
    ///
    /// # Errors
    ///
    /// 필수 값이 없거나 URL 형식이 잘못된 경우 `AppError::ConfigError`를 반환합니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 로드합니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않고 임의의 값을 주입할 때 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).unwrap_or_default();
        let read_or = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw = RawThreadsSettings {
            app_id: read(APP_ID_VAR),
            app_secret: read(APP_SECRET_VAR),
            redirect_uri: read(REDIRECT_URI_VAR),
            token_uri: read_or(TOKEN_URI_VAR, DEFAULT_TOKEN_URI),
            me_uri: read_or(ME_URI_VAR, DEFAULT_ME_URI),
        };

        raw.validate()
            .map_err(|e| AppError::ConfigError(describe_validation_errors(&e)))?;

        Ok(Self {
            app_id: raw.app_id,
            app_secret: Secret::new(raw.app_secret),
            redirect_uri: raw.redirect_uri,
            token_uri: raw.token_uri,
            me_uri: raw.me_uri,
        })
    }
}

impl fmt::Debug for ThreadsOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadsOAuthConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("token_uri", &self.token_uri)
            .field("me_uri", &self.me_uri)
            .finish()
    }
}

/// 검증 에러들을 필드 이름 순서로 정렬된 한 줄 메시지로 만듭니다.
fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

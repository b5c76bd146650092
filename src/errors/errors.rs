//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 콜백 처리 중 발생하는 모든 실패를 하나의 열거형으로 모으고,
//! `actix_web::ResponseError`를 통해 일관된 JSON 응답으로 변환합니다.
//!
//! ## 응답 매핑
//!
//! | AppError | HTTP Status | Body |
//! |----------|-------------|------|
//! | `MissingCode` | 400 | `{"ok":false,"error":"missing_code"}` |
//! | `TokenExchangeFailed` | 400 | `{"ok":false,"step":"token_exchange_failed","error":...}` |
//! | `ProfileFetchFailed` | 400 | `{"ok":false,"step":"me_failed","error":...}` |
//! | `ConfigError` | 500 | `{"ok":false,"error":"internal_error"}` |
//! | `InternalError` | 500 | `{"ok":false,"error":"internal_error"}` |
//!
//! 500 계열의 상세 메시지는 서버 로그에만 남고 클라이언트에는 노출되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn callback(code: Option<String>) -> Result<HttpResponse, AppError> {
//!     let code = code.filter(|c| !c.is_empty()).ok_or(AppError::MissingCode)?;
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 콜백 쿼리에 `code`가 없거나 비어 있음 (400 Bad Request)
    #[error("missing authorization code")]
    MissingCode,

    /// 토큰 교환 실패 (400 Bad Request)
    ///
    /// 프로바이더 응답의 `error` 필드만 담습니다.
    #[error("token exchange failed: {0}")]
    TokenExchangeFailed(Value),

    /// 프로필 조회 실패 (400 Bad Request)
    #[error("profile fetch failed: {0}")]
    ProfileFetchFailed(Value),

    /// 필수 설정 누락 또는 형식 오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 네트워크 오류, JSON 파싱 실패 등 예상치 못한 오류 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 실패 응답에 포함되는 단계 식별자
    pub fn step(&self) -> Option<&'static str> {
        match self {
            AppError::TokenExchangeFailed(_) => Some("token_exchange_failed"),
            AppError::ProfileFetchFailed(_) => Some("me_failed"),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingCode
            | AppError::TokenExchangeFailed(_)
            | AppError::ProfileFetchFailed(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::MissingCode => json!({
                "ok": false,
                "error": "missing_code"
            }),
            AppError::TokenExchangeFailed(detail) | AppError::ProfileFetchFailed(detail) => json!({
                "ok": false,
                "step": self.step(),
                "error": detail
            }),
            AppError::ConfigError(_) | AppError::InternalError(_) => json!({
                "ok": false,
                "error": "internal_error"
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

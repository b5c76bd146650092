//! # Threads OAuth 도메인 모델
//!
//! 콜백 처리 파이프라인의 두 단계를 타입으로 표현합니다.
//!
//! ```text
//! AuthorizationCode ──(1) token exchange──► TokenExchangeResult
//!                                                  │ AccessToken
//!                                                  ▼
//!                        ProfileFetchResult ◄──(2) profile fetch
//! ```
//!
//! 각 단계의 결과는 [`ProviderReply`]로부터 만들어지므로, 전송 계층 없이도
//! 분류 규칙(성공/실패, 에러 상세 추출)을 단독으로 검증할 수 있습니다.

pub mod threads_user;
pub mod token;

pub use threads_user::*;
pub use token::*;

use serde_json::Value;

/// 프로바이더 HTTP 응답의 상태 코드와 JSON 본문
///
/// 상태 코드와 관계없이 본문은 항상 JSON으로 파싱된 상태입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReply {
    pub status: u16,
    pub body: Value,
}

impl ProviderReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 클라이언트에 전달할 에러 상세
    ///
    /// 프로바이더 본문의 `error` 필드만 꺼내고, 없으면 `fallback` 문자열을 사용합니다.
    pub fn error_detail(&self, fallback: &str) -> Value {
        match self.body.get("error") {
            Some(error) if !error.is_null() => error.clone(),
            _ => Value::String(fallback.to_string()),
        }
    }
}

//! 토큰 교환 단계의 도메인 모델
//!
//! 인가 코드 → 토큰 교환 요청 → 토큰 교환 결과로 이어지는 1단계 파이프라인의 타입들입니다.

use std::fmt;

use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::errors::errors::{AppError, AppResult};

use super::ProviderReply;

/// OAuth authorization code grant 타입
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";

/// 콜백 쿼리에서 추출한 인가 코드
///
/// 비어 있지 않은 문자열임이 생성 시점에 보장됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationCode(String);

impl AuthorizationCode {
    /// 쿼리 파라미터 값에서 인가 코드를 만듭니다.
    ///
    /// # Errors
    ///
    /// 값이 없거나 비어 있으면 `AppError::MissingCode`
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        match raw {
            Some(code) if !code.is_empty() => Ok(Self(code.to_string())),
            _ => Err(AppError::MissingCode),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 토큰 엔드포인트로 전송되는 form 본문
///
/// `client_secret`이 포함되므로 `Debug`를 구현하지 않습니다.
#[derive(Serialize)]
pub struct TokenExchangeRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'static str,
    pub redirect_uri: &'a str,
    pub code: &'a str,
}

impl<'a> TokenExchangeRequest<'a> {
    pub fn new(
        client_id: &'a str,
        client_secret: &'a Secret<String>,
        redirect_uri: &'a str,
        code: &'a AuthorizationCode,
    ) -> Self {
        Self {
            client_id,
            client_secret: client_secret.expose_secret(),
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE,
            redirect_uri,
            code: code.as_str(),
        }
    }
}

/// 프로바이더가 발급한 액세스 토큰
///
/// 요청 처리 동안만 메모리에 존재하며 `Debug`, 로그, 응답 본문 어디에도 노출되지 않습니다.
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }

    /// 프로필 요청 URL에 넣기 위해 원문을 꺼냅니다.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// 1단계(토큰 교환)의 결과
#[derive(Debug)]
pub struct TokenExchangeResult {
    pub access_token: AccessToken,
}

impl TokenExchangeResult {
    /// 토큰 엔드포인트 응답을 분류합니다.
    ///
    /// 2xx가 아니거나 비어 있지 않은 `access_token` 문자열이 없으면
    /// 프로바이더의 `error` 필드만 담아 `TokenExchangeFailed`를 반환합니다.
    pub fn from_reply(reply: &ProviderReply) -> AppResult<Self> {
        let token = reply
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .filter(|t| !t.is_empty());

        match token {
            Some(token) if reply.is_success() => Ok(Self {
                access_token: AccessToken::new(token.to_string()),
            }),
            _ => Err(AppError::TokenExchangeFailed(
                reply.error_detail("no_access_token"),
            )),
        }
    }
}

//! # Threads Graph API 전송 계층
//!
//! 토큰 교환과 프로필 조회, 두 번의 외부 HTTP 호출을 담당합니다.
//! [`ThreadsGateway`] trait이 서비스와 전송 계층 사이의 경계이며,
//! 운영 환경에서는 `reqwest` 기반의 [`HttpThreadsGateway`]가 사용됩니다.
//!
//! ## 사용하는 Graph API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Token Exchange** | `https://graph.threads.net/oauth/access_token` | POST (form) |
//! | **User Profile** | `https://graph.threads.net/v1.0/me?fields=id,username` | GET |
//!
//! 응답 본문은 HTTP 상태 코드와 관계없이 JSON으로 파싱합니다.
//! 프로바이더는 실패 시에도 `{"error": {...}}` 형태의 구조화된 본문을 돌려주기 때문입니다.
//! 재시도와 별도 타임아웃은 두지 않습니다.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ThreadsOAuthConfig;
use crate::domain::models::threads::{AccessToken, ProviderReply, TokenExchangeRequest, PROFILE_FIELDS};
use crate::errors::errors::{AppResult, ErrorContext};

/// Threads Graph API 호출 경계
///
/// 구현체는 응답을 분류하지 않고 상태 코드와 JSON 본문만 돌려줍니다.
/// 네트워크 오류나 JSON 파싱 실패는 `AppError::InternalError`입니다.
#[async_trait]
pub trait ThreadsGateway: Send + Sync {
    async fn post_token_exchange(&self, request: &TokenExchangeRequest<'_>) -> AppResult<ProviderReply>;

    async fn get_profile(&self, access_token: &AccessToken) -> AppResult<ProviderReply>;
}

/// `reqwest` 기반 Graph API 클라이언트
pub struct HttpThreadsGateway {
    client: reqwest::Client,
    token_uri: String,
    me_uri: String,
}

impl HttpThreadsGateway {
    pub fn new(token_uri: impl Into<String>, me_uri: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            client,
            token_uri: token_uri.into(),
            me_uri: me_uri.into(),
        })
    }

    pub fn from_config(config: &ThreadsOAuthConfig) -> AppResult<Self> {
        Self::new(config.token_uri.clone(), config.me_uri.clone())
    }

    /// 프로필 조회 URL. 토큰은 URL 인코딩되어 쿼리 파라미터로 들어갑니다.
    fn profile_url(&self, access_token: &AccessToken) -> String {
        format!(
            "{}?fields={}&access_token={}",
            self.me_uri,
            PROFILE_FIELDS,
            urlencoding::encode(access_token.expose())
        )
    }

    async fn read_reply(response: reqwest::Response, what: &str) -> AppResult<ProviderReply> {
        let status = response.status().as_u16();
        // reqwest 에러 메시지에는 요청 URL(토큰 포함)이 들어가므로 제거합니다.
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("{} 응답 파싱 실패 (status {})", what, status))?;

        Ok(ProviderReply::new(status, body))
    }
}

#[async_trait]
impl ThreadsGateway for HttpThreadsGateway {
    async fn post_token_exchange(&self, request: &TokenExchangeRequest<'_>) -> AppResult<ProviderReply> {
        let response = self
            .client
            .post(&self.token_uri)
            .form(request)
            .send()
            .await
            .map_err(|e| e.without_url())
            .context("Threads 토큰 요청 실패")?;

        Self::read_reply(response, "Threads 토큰").await
    }

    async fn get_profile(&self, access_token: &AccessToken) -> AppResult<ProviderReply> {
        let response = self
            .client
            .get(self.profile_url(access_token))
            .send()
            .await
            .map_err(|e| e.without_url())
            .context("Threads 프로필 요청 실패")?;

        Self::read_reply(response, "Threads 프로필").await
    }
}

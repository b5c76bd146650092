//! # Threads OAuth 2.0 콜백 처리 서비스
//!
//! Authorization Code를 액세스 토큰으로 교환하고, 그 토큰으로 사용자 프로필을 조회합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! ┌─────────────┐          ┌─────────────────┐          ┌─────────────────┐
//! │   브라우저    │          │    우리 서버      │          │  Threads Graph  │
//! └─────────────┘          └─────────────────┘          └─────────────────┘
//!        │ GET /api/threads/callback?code=..  │                            │
//!        ├──────────────────────────────────►│                            │
//!        │                                   │ (1) POST /oauth/access_token│
//!        │                                   ├───────────────────────────►│
//!        │                                   │◄───────────────────────────┤
//!        │                                   │ (2) GET /v1.0/me            │
//!        │                                   ├───────────────────────────►│
//!        │                                   │◄───────────────────────────┤
//!        │ 200 { threads_user: {id, username} }                           │
//!        │◄──────────────────────────────────┤                            │
//! ```
//!
//! ## 보안 정책
//!
//! - **일회성 코드**: Authorization Code는 프로바이더 측에서 한 번만 교환됩니다.
//!   재사용된 코드는 `token_exchange_failed`로 드러나며, 로컬에서 성공으로 처리하지 않습니다.
//! - **토큰 비노출**: 액세스 토큰은 요청 처리 중 메모리에만 존재하며
//!   응답 본문과 로그 어디에도 기록되지 않습니다.
//! - **재시도 없음**: 모든 실패는 해당 요청에서 종결되며, 클라이언트는 OAuth 플로우를 처음부터 다시 시작해야 합니다.

use std::sync::Arc;

use crate::config::ThreadsOAuthConfig;
use crate::domain::models::threads::{
    AccessToken, AuthorizationCode, ProfileFetchResult, ThreadsUser, TokenExchangeRequest,
    TokenExchangeResult,
};
use crate::errors::errors::AppResult;

use super::threads_gateway::ThreadsGateway;

pub struct ThreadsAuthService {
    config: ThreadsOAuthConfig,
    gateway: Arc<dyn ThreadsGateway>,
}

impl ThreadsAuthService {
    pub fn new(config: ThreadsOAuthConfig, gateway: Arc<dyn ThreadsGateway>) -> Self {
        Self { config, gateway }
    }

    /// 콜백 전체 처리: 토큰 교환 후 프로필 조회
    ///
    /// 1단계가 성공해야만 2단계 요청이 나갑니다.
    pub async fn complete_callback(&self, code: &AuthorizationCode) -> AppResult<ThreadsUser> {
        let token = self.exchange_code(code).await?;
        let profile = self.fetch_profile(&token.access_token).await?;

        Ok(profile.user)
    }

    /// 1단계: Authorization Code → Access Token
    pub async fn exchange_code(&self, code: &AuthorizationCode) -> AppResult<TokenExchangeResult> {
        let request = TokenExchangeRequest::new(
            &self.config.app_id,
            &self.config.app_secret,
            &self.config.redirect_uri,
            code,
        );

        let reply = self.gateway.post_token_exchange(&request).await?;

        TokenExchangeResult::from_reply(&reply).inspect_err(|e| {
            log::warn!("Threads 토큰 교환 실패 (status {}): {}", reply.status, e);
        })
    }

    /// 2단계: Access Token → 사용자 프로필
    pub async fn fetch_profile(&self, access_token: &AccessToken) -> AppResult<ProfileFetchResult> {
        let reply = self.gateway.get_profile(access_token).await?;

        ProfileFetchResult::from_reply(&reply).inspect_err(|e| {
            log::warn!("Threads 프로필 조회 실패 (status {}): {}", reply.status, e);
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::models::threads::ProviderReply;
    use crate::errors::errors::AppError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) fn test_config() -> ThreadsOAuthConfig {
        ThreadsOAuthConfig::from_lookup(|key| match key {
            "THREADS_APP_ID" => Some("app-1".to_string()),
            "THREADS_APP_SECRET" => Some("s3cret".to_string()),
            "THREADS_REDIRECT_URI" => Some("https://example.com/api/threads/callback".to_string()),
            _ => None,
        })
        .unwrap()
    }

    /// 고정된 응답을 돌려주고 호출을 기록하는 테스트용 게이트웨이
    ///
    /// 프로바이더처럼 이미 교환된 코드를 다시 받으면 400 에러를 돌려줍니다.
    pub(crate) struct FakeGateway {
        pub token_reply: Result<ProviderReply, String>,
        pub profile_reply: Result<ProviderReply, String>,
        pub token_calls: AtomicUsize,
        pub profile_calls: AtomicUsize,
        pub seen_codes: Mutex<Vec<String>>,
        pub seen_tokens: Mutex<Vec<String>>,
        used_codes: Mutex<HashSet<String>>,
    }

    impl FakeGateway {
        pub(crate) fn new(
            token_reply: Result<ProviderReply, String>,
            profile_reply: Result<ProviderReply, String>,
        ) -> Self {
            Self {
                token_reply,
                profile_reply,
                token_calls: AtomicUsize::new(0),
                profile_calls: AtomicUsize::new(0),
                seen_codes: Mutex::new(Vec::new()),
                seen_tokens: Mutex::new(Vec::new()),
                used_codes: Mutex::new(HashSet::new()),
            }
        }

        pub(crate) fn happy() -> Self {
            Self::new(
                Ok(ProviderReply::new(200, json!({ "access_token": "tok123", "user_id": "42" }))),
                Ok(ProviderReply::new(200, json!({ "id": "42", "username": "alice" }))),
            )
        }

        pub(crate) fn calls(&self) -> (usize, usize) {
            (
                self.token_calls.load(Ordering::SeqCst),
                self.profile_calls.load(Ordering::SeqCst),
            )
        }
    }

    #[async_trait]
    impl ThreadsGateway for FakeGateway {
        async fn post_token_exchange(&self, request: &TokenExchangeRequest<'_>) -> AppResult<ProviderReply> {
            self.token_calls.fetch_add(1, Ordering::SeqCst);
            self.seen_codes.lock().unwrap().push(request.code.to_string());

            if !self.used_codes.lock().unwrap().insert(request.code.to_string()) {
                return Ok(ProviderReply::new(
                    400,
                    json!({ "error": { "message": "This authorization code has been used.", "code": 100 } }),
                ));
            }

            self.token_reply.clone().map_err(AppError::InternalError)
        }

        async fn get_profile(&self, access_token: &AccessToken) -> AppResult<ProviderReply> {
            self.profile_calls.fetch_add(1, Ordering::SeqCst);
            self.seen_tokens.lock().unwrap().push(access_token.expose().to_string());
            self.profile_reply.clone().map_err(AppError::InternalError)
        }
    }

    fn service_with(gateway: Arc<FakeGateway>) -> ThreadsAuthService {
        ThreadsAuthService::new(test_config(), gateway)
    }

    fn code(value: &str) -> AuthorizationCode {
        AuthorizationCode::parse(Some(value)).unwrap()
    }

    #[actix_web::test]
    async fn test_complete_callback_success() {
        let gateway = Arc::new(FakeGateway::happy());
        let service = service_with(gateway.clone());

        let user = service.complete_callback(&code("abc")).await.unwrap();

        assert_eq!(user, ThreadsUser { id: "42".to_string(), username: Some("alice".to_string()) });
        assert_eq!(gateway.calls(), (1, 1));
        assert_eq!(*gateway.seen_codes.lock().unwrap(), vec!["abc".to_string()]);
        assert_eq!(*gateway.seen_tokens.lock().unwrap(), vec!["tok123".to_string()]);
    }

    #[actix_web::test]
    async fn test_exchange_code_failure_skips_profile() {
        let gateway = Arc::new(FakeGateway::new(
            Ok(ProviderReply::new(400, json!({ "error": { "code": 100 } }))),
            Ok(ProviderReply::new(200, json!({ "id": "42" }))),
        ));
        let service = service_with(gateway.clone());

        let result = service.complete_callback(&code("abc")).await;

        assert!(matches!(result, Err(AppError::TokenExchangeFailed(_))));
        assert_eq!(gateway.calls(), (1, 0));
    }

    #[actix_web::test]
    async fn test_missing_access_token_skips_profile() {
        let gateway = Arc::new(FakeGateway::new(
            Ok(ProviderReply::new(200, json!({ "token_type": "bearer" }))),
            Ok(ProviderReply::new(200, json!({ "id": "42" }))),
        ));
        let service = service_with(gateway.clone());

        match service.complete_callback(&code("abc")).await {
            Err(AppError::TokenExchangeFailed(detail)) => assert_eq!(detail, Value::from("no_access_token")),
            other => panic!("Expected TokenExchangeFailed, got {:?}", other),
        }
        assert_eq!(gateway.calls(), (1, 0));
    }

    #[actix_web::test]
    async fn test_fetch_profile_failure() {
        let gateway = Arc::new(FakeGateway::new(
            Ok(ProviderReply::new(200, json!({ "access_token": "tok123" }))),
            Ok(ProviderReply::new(500, json!({ "error": { "message": "Unknown error" } }))),
        ));
        let service = service_with(gateway.clone());

        let result = service.complete_callback(&code("abc")).await;

        assert!(matches!(result, Err(AppError::ProfileFetchFailed(_))));
        assert_eq!(gateway.calls(), (1, 1));
    }

    #[actix_web::test]
    async fn test_fetch_profile_stage_alone() {
        let gateway = Arc::new(FakeGateway::happy());
        let service = service_with(gateway.clone());

        let result = service
            .fetch_profile(&AccessToken::new("direct-token".to_string()))
            .await
            .unwrap();

        assert_eq!(result.user.id, "42");
        assert_eq!(gateway.calls(), (0, 1));
        assert_eq!(*gateway.seen_tokens.lock().unwrap(), vec!["direct-token".to_string()]);
    }

    #[actix_web::test]
    async fn test_transport_error_propagates_as_internal() {
        let gateway = Arc::new(FakeGateway::new(
            Err("connection refused".to_string()),
            Ok(ProviderReply::new(200, json!({ "id": "42" }))),
        ));
        let service = service_with(gateway.clone());

        let result = service.complete_callback(&code("abc")).await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
        assert_eq!(gateway.calls(), (1, 0));
    }

    #[actix_web::test]
    async fn test_replayed_code_is_upstream_error() {
        let gateway = Arc::new(FakeGateway::happy());
        let service = service_with(gateway.clone());

        assert!(service.complete_callback(&code("abc")).await.is_ok());
        let replay = service.complete_callback(&code("abc")).await;

        assert!(matches!(replay, Err(AppError::TokenExchangeFailed(_))));
        assert_eq!(gateway.calls(), (2, 1));
    }
}

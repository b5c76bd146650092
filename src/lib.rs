//! Threads OAuth 콜백 서비스
//!
//! Threads 인가 서버가 리다이렉트하는 콜백을 받아 Authorization Code를 액세스 토큰으로 교환하고,
//! 그 토큰으로 인증된 사용자의 식별자(`id`, `username`)를 조회해 JSON으로 돌려줍니다.
//!
//! # Features
//!
//! - **코드 교환**: `POST https://graph.threads.net/oauth/access_token`
//! - **프로필 조회**: `GET https://graph.threads.net/v1.0/me?fields=id,username`
//! - **토큰 비노출**: 액세스 토큰은 응답 본문과 로그에 남지 않음
//! - **명시적 설정 주입**: 자격 증명은 시작 시 검증되어 서비스에 주입됨
//!
//! 토큰 저장, 갱신, 세션 관리, 재시도는 하지 않습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/threads/callback, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 쿼리 파싱, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 교환 → 프로필 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Threads Graph   │ ← 외부 OAuth 프로바이더
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use threads_oauth_callback::config::ThreadsOAuthConfig;
//! use threads_oauth_callback::services::auth::{HttpThreadsGateway, ThreadsAuthService};
//!
//! let config = ThreadsOAuthConfig::from_env()?;
//! let gateway = Arc::new(HttpThreadsGateway::from_config(&config)?);
//! let service = ThreadsAuthService::new(config, gateway);
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;

//! # Threads OAuth 서비스
//!
//! - [`threads_auth_service`] - 토큰 교환 → 프로필 조회 2단계 파이프라인
//! - [`threads_gateway`] - Graph API 전송 계층 (trait + reqwest 구현)

pub mod threads_auth_service;
pub mod threads_gateway;

pub use threads_auth_service::*;
pub use threads_gateway::*;

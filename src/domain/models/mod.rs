//! # Domain Models
//!
//! 외부 프로바이더와 주고받는 값들을 표현하는 도메인 모델입니다.
//! 모든 모델은 요청 범위에서만 존재하며 저장되지 않습니다.
//!
//! - [`threads`] - Threads OAuth 토큰 교환 및 프로필 조회 모델

pub mod threads;

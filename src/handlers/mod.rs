//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 쿼리 파싱과 응답 변환만 담당하고, 외부 호출은 서비스 계층에 위임합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Threads 인가 서버 리다이렉트 (Browser)
//! └─────────────────────┬───────────────────────┘
//!                       │ GET /api/threads/callback?code=...
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   ThreadsAuthService                           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   ThreadsGateway (reqwest)                     ← Transport
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현에 의해 JSON 응답으로 변환됩니다.

pub mod threads;

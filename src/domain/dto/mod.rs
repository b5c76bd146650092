//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//!
//! - [`callback_request`] - 콜백 쿼리 파라미터
//! - [`callback_response`] - 콜백 성공 응답 본문

pub mod callback_request;
pub mod callback_response;

pub use callback_request::*;
pub use callback_response::*;

//! # Domain Layer
//!
//! - [`dto`] - HTTP 요청/응답 DTO
//! - [`models`] - 프로바이더 통신 도메인 모델

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::threads::*;

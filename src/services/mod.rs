//! # Service Layer
//!
//! 비즈니스 로직을 담당하는 서비스 계층입니다.
//! 핸들러는 요청/응답 변환만 하고, 외부 프로바이더와의 상호작용은 모두 이 계층을 거칩니다.

pub mod auth;

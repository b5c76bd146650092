//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`threads_config`] - Threads 앱 자격 증명, Graph API 엔드포인트
//! - [`server_config`] - 바인딩 주소, 실행 프로필(`.env` 파일 선택)
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공하고 `secrecy::Secret`으로 보관
//! - 필수 설정값은 서버 시작 시 검증하며, 누락되면 서버가 뜨지 않음
//! - 검증된 설정은 핸들러에 명시적으로 주입
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # Threads OAuth (필수)
//! export THREADS_APP_ID="your-app-id"
//! export THREADS_APP_SECRET="your-app-secret"
//! export THREADS_REDIRECT_URI="https://yourdomain.com/api/threads/callback"
//!
//! # 서버 (선택)
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export PROFILE="prod"   # dev | prod | 기타
//! ```

pub mod server_config;
pub mod threads_config;

pub use server_config::*;
pub use threads_config::*;

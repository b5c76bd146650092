//! 콜백 요청 DTO
//!
//! Threads 인가 서버가 리다이렉트하면서 붙이는 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 `code` 대신 `error` 계열 필드가 붙어 옵니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,

    pub error: Option<String>,
    pub error_reason: Option<String>,
    pub error_description: Option<String>,
}

impl OAuthCallbackQuery {
    /// 원시 쿼리 문자열을 파싱합니다.
    ///
    /// 파싱할 수 없는 쿼리(예: `code`가 여러 번 나온 경우)는 `None`입니다.
    pub fn from_query_string(query: &str) -> Option<Self> {
        actix_web::web::Query::<Self>::from_query(query)
            .ok()
            .map(|q| q.into_inner())
    }
}

//! Threads OAuth HTTP Handlers
//!
//! Threads 인가 서버가 리다이렉트하는 콜백 엔드포인트입니다.
//!
//! - `GET /api/threads/callback?code=...` - 코드 교환 후 사용자 식별자 반환
use actix_web::{get, web, HttpRequest, HttpResponse, ResponseError};
use uuid::Uuid;

use crate::domain::{AuthorizationCode, CallbackSuccessResponse, OAuthCallbackQuery};
use crate::errors::errors::AppError;
use crate::services::auth::ThreadsAuthService;

#[get("/callback")]
pub async fn threads_oauth_callback(
    req: HttpRequest,
    service: web::Data<ThreadsAuthService>,
) -> Result<HttpResponse, AppError> {
    let request_id = Uuid::new_v4();

    // 파싱 불가능한 쿼리(코드 중복 등)는 코드가 없는 것으로 취급
    let query = OAuthCallbackQuery::from_query_string(req.query_string()).unwrap_or_default();

    // 사용자가 동의를 거부했거나 인가 서버 에러
    if let Some(error) = &query.error {
        log::warn!(
            "[{}] Threads OAuth 에러: {} ({}) - {}",
            request_id,
            error,
            query.error_reason.as_deref().unwrap_or("-"),
            query.error_description.as_deref().unwrap_or("-")
        );
    }

    let code = AuthorizationCode::parse(query.code.as_deref()).inspect_err(|_| {
        log::info!("[{}] 콜백에 code 파라미터가 없습니다", request_id);
    })?;

    match service.complete_callback(&code).await {
        Ok(user) => {
            log::info!("[{}] Threads 사용자 확인: {}", request_id, user.id);
            Ok(HttpResponse::Ok().json(CallbackSuccessResponse::new(user)))
        }
        Err(e) => {
            if e.status_code().is_server_error() {
                log::error!("[{}] Threads 콜백 처리 중 예외: {}", request_id, e);
            } else {
                log::warn!("[{}] Threads 콜백 실패: {}", request_id, e);
            }
            Err(e)
        }
    }
}

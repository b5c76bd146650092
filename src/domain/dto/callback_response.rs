//! 콜백 응답 DTO
//!
//! 성공 시 응답 본문입니다. 실패 응답은 `AppError`의 `ResponseError` 구현이 만듭니다.

use serde::Serialize;

use crate::domain::models::threads::ThreadsUser;

/// 액세스 토큰을 돌려주지 않는다는 안내 문구
pub const TOKEN_NOT_RETURNED_NOTE: &str =
    "access_token is NOT returned; it is used server-side only for this request and then discarded";

/// OAuth 콜백 성공 응답
#[derive(Debug, Serialize)]
pub struct CallbackSuccessResponse {
    pub ok: bool,
    pub threads_user: ThreadsUser,
    pub note: &'static str,
}

impl CallbackSuccessResponse {
    pub fn new(threads_user: ThreadsUser) -> Self {
        Self {
            ok: true,
            threads_user,
            note: TOKEN_NOT_RETURNED_NOTE,
        }
    }
}

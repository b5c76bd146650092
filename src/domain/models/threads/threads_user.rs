//! # Threads 사용자 프로필 모델
//!
//! `GET /v1.0/me?fields=id,username` 응답에서 추출한 사용자 정보입니다.
//! 응답 본문에는 `id`와 `username`만 실려 나가며, 그 밖의 프로바이더 필드는 버려집니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::errors::{AppError, AppResult};

use super::ProviderReply;

/// 프로필 조회 시 요청하는 필드 목록
pub const PROFILE_FIELDS: &str = "id,username";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadsUser {
    pub id: String,

    /// 권한 범위에 따라 누락될 수 있습니다.
    pub username: Option<String>,
}

/// 2단계(프로필 조회)의 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFetchResult {
    pub user: ThreadsUser,
}

impl ProfileFetchResult {
    /// 프로필 엔드포인트 응답을 분류합니다.
    ///
    /// 2xx가 아니거나 `id`가 없으면 `ProfileFetchFailed`를 반환합니다.
    /// Graph API는 `id`를 문자열로 주지만 숫자로 와도 문자열로 받아들입니다.
    pub fn from_reply(reply: &ProviderReply) -> AppResult<Self> {
        let id = match reply.body.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };

        match id {
            Some(id) if reply.is_success() => {
                let username = reply
                    .body
                    .get("username")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);

                Ok(Self {
                    user: ThreadsUser { id, username },
                })
            }
            _ => Err(AppError::ProfileFetchFailed(reply.error_detail("no_user_id"))),
        }
    }
}

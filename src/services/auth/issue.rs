use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::{SessionIssuedResponse, SessionRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

pub async fn handle_issue_session(
    _service: &AuthService,
    session_request: SessionRequest,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 用调用方提供的身份负载签发 1 小时会话令牌
    match JwtUtils::generate_session_token(&session_request.0) {
        Ok(token) => {
            tracing::info!(
                "Session issued for {}",
                session_request.email().unwrap_or("<no email in payload>")
            );

            // 2. 令牌只经 HttpOnly Cookie 下发，服务端不保存会话状态
            let cookie = JwtUtils::create_session_cookie(&token);

            Ok(HttpResponse::Ok()
                .cookie(cookie)
                .json(ApiResponse::success(
                    SessionIssuedResponse { success: true },
                    "会话签发成功",
                )))
        }
        Err(e) => {
            tracing::error!("Failed to sign session token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "会话签发失败",
                )),
            )
        }
    }
}

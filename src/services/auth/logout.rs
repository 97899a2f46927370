use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::auth::SessionIssuedResponse;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

pub async fn handle_logout(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    tracing::info!("Session cleared for request to {}", request.path());

    // 零生命周期重发同属性 Cookie 以清除会话
    let cookie = JwtUtils::create_empty_session_cookie();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success(
            SessionIssuedResponse { success: true },
            "会话已注销",
        )))
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::SessionRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn issue_session(
    req: HttpRequest,
    session_data: web::Json<SessionRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .issue_session(session_data.into_inner(), &req)
        .await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

// 配置路由
//
// 签发与注销均不要求既有会话。
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/jwt", web::post().to(issue_session))
        .route("/logout", web::post().to(logout));
}

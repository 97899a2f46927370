pub mod issue;
pub mod logout;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::SessionRequest;

pub struct AuthService;

impl AuthService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 签发会话
    pub async fn issue_session(
        &self,
        session_request: SessionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        issue::handle_issue_session(self, session_request, request).await
    }

    // 注销会话
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, request).await
    }
}

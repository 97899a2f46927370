/*!
 * 会话认证中间件
 *
 * 此中间件用于验证会话 Cookie 中 JWT 令牌的有效性，确保只有持有有效
 * 会话的用户才能访问受保护的路由。会话不落库，验证完全无状态。
 *
 * ## 使用方法
 *
 * 1. 在路由上应用中间件：
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireSession;
 *
 * cfg.service(
 *     web::resource("/create-assignment")
 *         .wrap(RequireSession)
 *         .route(web::post().to(create_assignment)),
 * );
 * ```
 *
 * 2. 在处理程序中提取会话身份：
 * ```rust,ignore
 * if let Some(claims) = RequireSession::extract_session_claims(&req) {
 *     // claims.identity 即签发时调用方提供的负载
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端请求携带名为 `token` 的 HttpOnly Cookie
 * 2. 中间件提取并验证 JWT 令牌的签名与有效期
 * 3. 如果令牌有效，将解码负载存入请求扩展，继续处理请求
 * 4. 如果 Cookie 缺失或令牌无效，返回 401 未授权错误
 */

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::{JwtUtils, SessionClaims};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct RequireSession;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                message,
            )),
    }
}

// 辅助函数：提取并验证会话令牌
fn extract_and_validate_session(req: &ServiceRequest) -> Result<SessionClaims, &'static str> {
    // Cookie 缺失与令牌无效返回不同的提示语，前端依赖该区分
    let token = req
        .cookie(&crate::config::AppConfig::get().jwt.cookie_name)
        .map(|cookie| cookie.value().to_string())
        .ok_or("not authorized")?;

    JwtUtils::verify_session_token(&token).map_err(|err| {
        info!("Session token validation failed: {}", err);
        "unauthorized"
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 验证会话令牌
            match extract_and_validate_session(&req) {
                Ok(claims) => {
                    debug!("Session verified for request to {}", req.path());
                    // 将会话身份添加到请求扩展中，供后续处理程序使用
                    req.extensions_mut().insert(claims);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Session verification failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, err)
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取会话身份
impl RequireSession {
    /// 从请求扩展中提取会话 Claims
    /// 此函数应该在应用了 RequireSession 中间件的路由处理程序中使用
    pub fn extract_session_claims(req: &actix_web::HttpRequest) -> Option<SessionClaims> {
        req.extensions().get::<SessionClaims>().cloned()
    }

    /// 从请求扩展中提取会话身份的 email 字段（如有）
    pub fn extract_session_email(req: &actix_web::HttpRequest) -> Option<String> {
        req.extensions()
            .get::<SessionClaims>()
            .and_then(|claims| claims.identity.get("email"))
            .and_then(|value| value.as_str())
            .map(|email| email.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpRequest, cookie::Cookie, test, web};
    use serde_json::{Map, Value};

    async fn protected(req: HttpRequest) -> HttpResponse {
        match RequireSession::extract_session_email(&req) {
            Some(email) => HttpResponse::Ok().body(email),
            None => HttpResponse::Ok().body("no-email"),
        }
    }

    fn identity() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("email".into(), Value::String("a@x.com".into()));
        map
    }

    #[actix_web::test]
    async fn test_missing_cookie_yields_401() {
        let app = test::init_service(
            App::new().service(
                web::resource("/protected")
                    .wrap(RequireSession)
                    .route(web::get().to(protected)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_cookie_reaches_handler() {
        let app = test::init_service(
            App::new().service(
                web::resource("/protected")
                    .wrap(RequireSession)
                    .route(web::get().to(protected)),
            ),
        )
        .await;

        let token = JwtUtils::generate_session_token(&identity()).unwrap();
        let req = test::TestRequest::get()
            .uri("/protected")
            .cookie(Cookie::new("token", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "a@x.com");
    }

    #[actix_web::test]
    async fn test_tampered_token_yields_401() {
        let app = test::init_service(
            App::new().service(
                web::resource("/protected")
                    .wrap(RequireSession)
                    .route(web::get().to(protected)),
            ),
        )
        .await;

        let mut token = JwtUtils::generate_session_token(&identity()).unwrap();
        token.push('x');
        let req = test::TestRequest::get()
            .uri("/protected")
            .cookie(Cookie::new("token", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

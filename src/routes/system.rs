use actix_web::{HttpResponse, Result as ActixResult, web};

// 存活探针，返回文案为前端健康检查所依赖
pub async fn liveness() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("studySync server is study"))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(liveness));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_liveness_text() {
        let app = test::init_service(App::new().configure(configure_system_routes)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(body, "studySync server is study");
    }
}

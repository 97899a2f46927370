use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::FeatureService;

// 懒加载的全局 FeatureService 实例
static FEATURE_SERVICE: Lazy<FeatureService> = Lazy::new(FeatureService::new_lazy);

// 列出平台特性
pub async fn list_features(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEATURE_SERVICE.list_features(&req).await
}

// 配置路由
pub fn configure_features_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/features", web::get().to(list_features));
}

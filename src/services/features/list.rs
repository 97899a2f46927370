use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeatureService;
use crate::models::{ApiResponse, ErrorCode};

/// 列出平台特性
/// GET /features
pub async fn list_features(
    service: &FeatureService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_features().await {
        Ok(features) => Ok(HttpResponse::Ok().json(ApiResponse::success(features, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询特性列表失败: {e}"),
            )),
        ),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode};

/// 批改工作台列表
/// GET /pending
///
/// 返回全部提交，不按 status 过滤，由前端自行筛选。
pub async fn list_pending(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_submissions().await {
        Ok(submissions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submissions, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交列表失败: {e}"),
            )),
        ),
    }
}

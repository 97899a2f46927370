use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode};

/// 排行榜数据源
/// GET /leaderboard
///
/// 返回全部提交，不做服务端聚合，按学生求和由前端完成。
pub async fn leaderboard(
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
                format!("查询排行榜数据失败: {e}"),
            )),
        ),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::AssignmentListParams;
use crate::models::{ApiResponse, ErrorCode};

/// 分页列出作业
/// GET /assignments?page=&limit=&difficulty=
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    params: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 难度取值在进入存储层前解析，"all" 等价于不过滤
    let query = match params.into_query() {
        Ok(query) => query,
        Err(message) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)));
        }
    };

    match storage.list_assignments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业列表失败: {e}"),
            )),
        ),
    }
}

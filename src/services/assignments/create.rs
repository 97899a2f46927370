use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建作业
/// POST /create-assignment
pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_assignment(req).await {
        Ok(ack) => Ok(HttpResponse::Ok().json(ApiResponse::success(ack, "作业创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除作业
/// DELETE /delete-assignment/{id}
///
/// 未命中时 deletedCount 为 0，按成功返回。
pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: ObjectId,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_assignment(assignment_id).await {
        Ok(ack) => Ok(HttpResponse::Ok().json(ApiResponse::success(ack, "作业删除完成"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除作业失败: {e}"),
            )),
        ),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;

use super::AssignmentService;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新作业的六个可编辑字段
/// PATCH /update-assignment/{id}
pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: ObjectId,
    req: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_assignment(assignment_id, req).await {
        // matched_count 为 0 即目标不存在
        Ok(ack) if ack.matched_count == 0 => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::AssignmentNotFound, "作业不存在"),
        )),
        Ok(ack) => Ok(HttpResponse::Ok().json(ApiResponse::success(ack, "作业更新成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新作业失败: {e}"),
            )),
        ),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;

use super::SubmissionService;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 批改提交
/// PATCH /complete-assignment/{id}
///
/// 整体覆盖快照与批改字段，无状态机约束，重复批改幂等。
pub async fn complete_assignment(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: ObjectId,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.grade_submission(submission_id, req).await {
        Ok(ack) if ack.matched_count == 0 => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::SubmissionNotFound, "提交不存在"),
        )),
        Ok(ack) => Ok(HttpResponse::Ok().json(ApiResponse::success(ack, "批改完成"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("批改提交失败: {e}"),
            )),
        ),
    }
}

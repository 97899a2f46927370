use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::requests::SubmitAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

/// 学生提交作业
/// POST /submit-assignment
pub async fn submit_assignment(
    service: &SubmissionService,
    request: &HttpRequest,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    // submittedBy 作为身份键，入库前做格式校验
    if let Err(message) = validate_email(&req.submitted_by) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message))
        );
    }

    let storage = service.get_storage(request);

    match storage.create_submission(req).await {
        Ok(ack) => Ok(HttpResponse::Ok().json(ApiResponse::success(ack, "提交成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建提交失败: {e}"),
            )),
        ),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

/// 按学生邮箱列出提交历史
/// GET /my-submissions/{email}
pub async fn list_my_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    email: String,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_email(&email) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message))
        );
    }

    let storage = service.get_storage(request);

    // 精确字符串匹配 submittedBy
    match storage.list_submissions_by_student(&email).await {
        Ok(submissions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submissions, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学生提交失败: {e}"),
            )),
        ),
    }
}

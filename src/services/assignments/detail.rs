use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

/// 获取作业详情
/// GET /assignment/{id}
///
/// 未命中返回显式 404。
pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: ObjectId,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业失败: {e}"),
            )),
        ),
    }
}

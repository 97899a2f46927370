use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::{GradeSubmissionRequest, SubmitAssignmentRequest};
use crate::services::SubmissionService;
use crate::utils::SafeObjectId;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 学生提交作业
pub async fn submit_assignment(
    req: HttpRequest,
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_assignment(&req, body.into_inner())
        .await
}

// 批改工作台列表
pub async fn list_pending(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_pending(&req).await
}

// 批改提交
pub async fn complete_assignment(
    req: HttpRequest,
    path: SafeObjectId,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .complete_assignment(&req, path.0, body.into_inner())
        .await
}

// 学生提交历史
pub async fn list_my_submissions(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_my_submissions(&req, path.into_inner())
        .await
}

// 排行榜数据源
pub async fn leaderboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.leaderboard(&req).await
}

// 配置路由
//
// 写操作与按人查询置于会话门禁之后，全量只读列表开放访问。
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/pending", web::get().to(list_pending))
        .route("/leaderboard", web::get().to(leaderboard))
        .service(
            web::resource("/submit-assignment")
                .wrap(middlewares::RequireSession)
                .route(web::post().to(submit_assignment)),
        )
        .service(
            web::resource("/complete-assignment/{id}")
                .wrap(middlewares::RequireSession)
                .route(web::patch().to(complete_assignment)),
        )
        .service(
            web::resource("/my-submissions/{email}")
                .wrap(middlewares::RequireSession)
                .route(web::get().to(list_my_submissions)),
        );
}

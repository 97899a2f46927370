use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::services::AssignmentService;
use crate::utils::SafeObjectId;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

// 列出作业
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

// 获取作业详情
pub async fn get_assignment(req: HttpRequest, path: SafeObjectId) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, path.0).await
}

// 更新作业
pub async fn update_assignment(
    req: HttpRequest,
    path: SafeObjectId,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, path.0, body.into_inner())
        .await
}

// 删除作业
pub async fn delete_assignment(req: HttpRequest, path: SafeObjectId) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(&req, path.0).await
}

// 配置路由
//
// 只读列表与详情开放访问，所有写操作统一置于会话门禁之后。
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/assignments", web::get().to(list_assignments))
        .route("/assignment/{id}", web::get().to(get_assignment))
        .service(
            web::resource("/create-assignment")
                .wrap(middlewares::RequireSession)
                .route(web::post().to(create_assignment)),
        )
        .service(
            web::resource("/update-assignment/{id}")
                .wrap(middlewares::RequireSession)
                .route(web::patch().to(update_assignment)),
        )
        .service(
            web::resource("/delete-assignment/{id}")
                .wrap(middlewares::RequireSession)
                .route(web::delete().to(delete_assignment)),
        );
}

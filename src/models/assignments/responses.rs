use serde::Serialize;

use crate::models::assignments::entities::Assignment;

/// 作业分页列表响应，字段名与前端约定保持一致
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentListResponse {
    pub data: Vec<Assignment>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

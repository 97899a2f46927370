use serde::Deserialize;

use crate::models::submissions::entities::{AssignmentSnapshot, SubmissionStatus};

/// 学生提交作业请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssignmentRequest {
    pub assignment: AssignmentSnapshot,
    pub submitted_by: String,
    pub pdf_link: String,
    pub note: String,
    // 缺省时按待批改入库
    #[serde(default)]
    pub status: SubmissionStatus,
}

/// 批改请求：携带完整提交快照加批改字段，一次性整体覆盖
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSubmissionRequest {
    pub assignment: AssignmentSnapshot,
    pub submitted_by: String,
    pub pdf_link: String,
    pub note: String,
    pub status: SubmissionStatus,
    pub given_mark: Option<f64>,
    pub feedback: Option<String>,
}

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::models::{
    DeleteAck, InsertAck, UpdateAck,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    features::entities::Feature,
    submissions::{
        entities::Submission,
        requests::{GradeSubmissionRequest, SubmitAssignmentRequest},
    },
};

use crate::errors::Result;

pub mod mongo_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<InsertAck>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: ObjectId) -> Result<Option<Assignment>>;
    // 分页列出作业，支持难度过滤
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 更新作业的六个可编辑字段
    async fn update_assignment(
        &self,
        id: ObjectId,
        update: UpdateAssignmentRequest,
    ) -> Result<UpdateAck>;
    // 删除作业
    async fn delete_assignment(&self, id: ObjectId) -> Result<DeleteAck>;

    /// 提交管理方法
    // 学生提交作业
    async fn create_submission(&self, req: SubmitAssignmentRequest) -> Result<InsertAck>;
    // 列出全部提交
    async fn list_submissions(&self) -> Result<Vec<Submission>>;
    // 按学生邮箱列出提交
    async fn list_submissions_by_student(&self, email: &str) -> Result<Vec<Submission>>;
    // 批改提交（整体覆盖快照与批改字段）
    async fn grade_submission(
        &self,
        id: ObjectId,
        grade: GradeSubmissionRequest,
    ) -> Result<UpdateAck>;

    /// 特性列表方法
    async fn list_features(&self) -> Result<Vec<Feature>>;

    /// 连接探活
    async fn ping(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = mongo_storage::MongoStorage::new_async().await?;
    Ok(Arc::new(storage))
}

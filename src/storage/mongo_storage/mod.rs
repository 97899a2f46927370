//! MongoDB 存储实现
//!
//! 文档型存储层，三个逻辑集合：assignments、submitted-assignments、features。

mod assignments;
mod features;
mod submissions;

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::config::AppConfig;
use crate::errors::{Result, StudySyncError};
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
use crate::storage::Storage;

const ASSIGNMENTS_COLLECTION: &str = "assignments";
const SUBMISSIONS_COLLECTION: &str = "submitted-assignments";
const FEATURES_COLLECTION: &str = "features";

/// MongoDB 存储实现
#[derive(Clone)]
pub struct MongoStorage {
    pub(crate) db: Database,
}

impl MongoStorage {
    /// 创建新的 MongoDB 存储实例
    ///
    /// 客户端连接是惰性的，真正的网络往返发生在第一次操作时。
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();

        let mut options = ClientOptions::parse(&config.database.url)
            .await
            .map_err(|e| StudySyncError::database_config(format!("MongoDB URI 解析失败: {e}")))?;
        options.app_name = Some(config.app.system_name.clone());
        options.server_selection_timeout = Some(Duration::from_secs(config.database.timeout));

        let client = Client::with_options(options)
            .map_err(|e| StudySyncError::database_connection(format!("MongoDB 客户端创建失败: {e}")))?;
        let db = client.database(&config.database.name);

        info!("MongoDB 存储初始化完成，数据库: {}", config.database.name);

        Ok(Self { db })
    }

    pub(crate) fn assignments(&self) -> Collection<Assignment> {
        self.db.collection(ASSIGNMENTS_COLLECTION)
    }

    pub(crate) fn submissions(&self) -> Collection<Submission> {
        self.db.collection(SUBMISSIONS_COLLECTION)
    }

    pub(crate) fn features(&self) -> Collection<Feature> {
        self.db.collection(FEATURES_COLLECTION)
    }

    async fn ping_impl(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StudySyncError::database_connection(format!("MongoDB ping 失败: {e}")))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for MongoStorage {
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<InsertAck> {
        self.create_assignment_impl(req).await
    }

    async fn get_assignment_by_id(&self, id: ObjectId) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        id: ObjectId,
        update: UpdateAssignmentRequest,
    ) -> Result<UpdateAck> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: ObjectId) -> Result<DeleteAck> {
        self.delete_assignment_impl(id).await
    }

    async fn create_submission(&self, req: SubmitAssignmentRequest) -> Result<InsertAck> {
        self.create_submission_impl(req).await
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        self.list_submissions_impl().await
    }

    async fn list_submissions_by_student(&self, email: &str) -> Result<Vec<Submission>> {
        self.list_submissions_by_student_impl(email).await
    }

    async fn grade_submission(
        &self,
        id: ObjectId,
        grade: GradeSubmissionRequest,
    ) -> Result<UpdateAck> {
        self.grade_submission_impl(id, grade).await
    }

    async fn list_features(&self) -> Result<Vec<Feature>> {
        self.list_features_impl().await
    }

    async fn ping(&self) -> Result<()> {
        self.ping_impl().await
    }
}

//! 特性列表存储操作

use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};

use super::MongoStorage;
use crate::errors::{Result, StudySyncError};
use crate::models::features::entities::Feature;

impl MongoStorage {
    /// 列出全部特性条目，只读集合，数据由运维预置
    pub(crate) async fn list_features_impl(&self) -> Result<Vec<Feature>> {
        self.features()
            .find(Document::new())
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| StudySyncError::database_operation(format!("查询特性列表失败: {e}")))?
            .try_collect()
            .await
            .map_err(|e| StudySyncError::database_operation(format!("读取特性列表失败: {e}")))
    }
}

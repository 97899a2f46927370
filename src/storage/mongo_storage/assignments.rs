//! 作业存储操作

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};

use super::MongoStorage;
use crate::errors::{Result, StudySyncError};
use crate::models::{
    DeleteAck, InsertAck, UpdateAck,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    total_pages,
};

/// skip = (page - 1) * limit
///
/// page 来自调用方输入，饱和运算防止大页码下的乘法溢出，
/// 超界页码只会落到一个必然为空的偏移上。
pub(crate) fn pagination_skip(page: i64, limit: i64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit).max(0) as u64
}

impl MongoStorage {
    /// 创建作业
    pub(crate) async fn create_assignment_impl(
        &self,
        req: CreateAssignmentRequest,
    ) -> Result<InsertAck> {
        let assignment = Assignment {
            id: None,
            title: req.title,
            description: req.description,
            difficulty: req.difficulty,
            marks: req.marks,
            image: req.image,
            due_date: req.due_date,
        };

        let result = self
            .assignments()
            .insert_one(&assignment)
            .await
            .map_err(|e| StudySyncError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(InsertAck {
            inserted_id: result
                .inserted_id
                .as_object_id()
                .map(|oid| oid.to_hex())
                .unwrap_or_default(),
        })
    }

    /// 通过 ID 获取作业
    pub(crate) async fn get_assignment_by_id_impl(
        &self,
        id: ObjectId,
    ) -> Result<Option<Assignment>> {
        self.assignments()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| StudySyncError::database_operation(format!("查询作业失败: {e}")))
    }

    /// 分页列出作业
    pub(crate) async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.max(1);
        // 单页上限 100，阻止一次请求拉取全量集合
        let limit = query.limit.clamp(1, 100);

        // 难度筛选，缺省为全量
        let filter = match query.difficulty {
            Some(difficulty) => doc! { "difficulty": difficulty.to_string() },
            None => Document::new(),
        };

        let total = self
            .assignments()
            .count_documents(filter.clone())
            .await
            .map_err(|e| StudySyncError::database_operation(format!("统计作业总数失败: {e}")))?
            as i64;

        // 按 _id 升序排列，即确定的创建顺序
        let data: Vec<Assignment> = self
            .assignments()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(pagination_skip(page, limit))
            .limit(limit)
            .await
            .map_err(|e| StudySyncError::database_operation(format!("查询作业列表失败: {e}")))?
            .try_collect()
            .await
            .map_err(|e| StudySyncError::database_operation(format!("读取作业列表失败: {e}")))?;

        Ok(AssignmentListResponse {
            data,
            current_page: page,
            total_pages: total_pages(total, limit),
            total_items: total,
        })
    }

    /// 更新作业：$set 六个可编辑字段
    pub(crate) async fn update_assignment_impl(
        &self,
        id: ObjectId,
        update: UpdateAssignmentRequest,
    ) -> Result<UpdateAck> {
        let set = doc! {
            "$set": {
                "title": update.title,
                "description": update.description,
                "difficulty": update.difficulty.to_string(),
                "marks": update.marks,
                "image": update.image,
                "dueDate": update.due_date,
            }
        };

        let result = self
            .assignments()
            .update_one(doc! { "_id": id }, set)
            .await
            .map_err(|e| StudySyncError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// 删除作业，未命中时 deleted_count 为 0，不视为错误
    pub(crate) async fn delete_assignment_impl(&self, id: ObjectId) -> Result<DeleteAck> {
        let result = self
            .assignments()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| StudySyncError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_skip_values() {
        assert_eq!(pagination_skip(1, 6), 0);
        assert_eq!(pagination_skip(2, 6), 6);
        assert_eq!(pagination_skip(3, 10), 20);
    }

    #[test]
    fn test_pagination_skip_huge_page_does_not_overflow() {
        // 极端页码不得触发乘法溢出，饱和到 i64::MAX 对应的偏移即可
        assert_eq!(pagination_skip(i64::MAX, 6), i64::MAX as u64);
        assert_eq!(pagination_skip(i64::MAX, 100), i64::MAX as u64);
    }
}

//! 提交存储操作

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc, to_bson};

use super::MongoStorage;
use crate::errors::{Result, StudySyncError};
use crate::models::{
    InsertAck, UpdateAck,
    submissions::{
        entities::Submission,
        requests::{GradeSubmissionRequest, SubmitAssignmentRequest},
    },
};

/// 批改用的 $set 文档：快照与批改字段一次性整体覆盖
///
/// 纯覆盖语义使重复提交同一批改请求幂等。
pub(crate) fn grade_update_document(grade: &GradeSubmissionRequest) -> Result<Document> {
    let snapshot = to_bson(&grade.assignment)
        .map_err(|e| StudySyncError::serialization(format!("作业快照序列化失败: {e}")))?;

    Ok(doc! {
        "$set": {
            "assignment": snapshot,
            "submittedBy": grade.submitted_by.clone(),
            "pdfLink": grade.pdf_link.clone(),
            "note": grade.note.clone(),
            "status": grade.status.to_string(),
            "givenMark": grade.given_mark,
            "feedback": grade.feedback.clone(),
        }
    })
}

impl MongoStorage {
    /// 学生提交作业
    pub(crate) async fn create_submission_impl(
        &self,
        req: SubmitAssignmentRequest,
    ) -> Result<InsertAck> {
        let submission = Submission {
            id: None,
            assignment: req.assignment,
            submitted_by: req.submitted_by,
            pdf_link: req.pdf_link,
            note: req.note,
            status: req.status,
            given_mark: None,
            feedback: None,
        };

        let result = self
            .submissions()
            .insert_one(&submission)
            .await
            .map_err(|e| StudySyncError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(InsertAck {
            inserted_id: result
                .inserted_id
                .as_object_id()
                .map(|oid| oid.to_hex())
                .unwrap_or_default(),
        })
    }

    /// 列出全部提交（不做状态过滤）
    pub(crate) async fn list_submissions_impl(&self) -> Result<Vec<Submission>> {
        self.submissions()
            .find(Document::new())
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| StudySyncError::database_operation(format!("查询提交列表失败: {e}")))?
            .try_collect()
            .await
            .map_err(|e| StudySyncError::database_operation(format!("读取提交列表失败: {e}")))
    }

    /// 按学生邮箱精确匹配列出提交
    pub(crate) async fn list_submissions_by_student_impl(
        &self,
        email: &str,
    ) -> Result<Vec<Submission>> {
        self.submissions()
            .find(doc! { "submittedBy": email })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| StudySyncError::database_operation(format!("查询学生提交失败: {e}")))?
            .try_collect()
            .await
            .map_err(|e| StudySyncError::database_operation(format!("读取学生提交失败: {e}")))
    }

    /// 批改提交
    pub(crate) async fn grade_submission_impl(
        &self,
        id: ObjectId,
        grade: GradeSubmissionRequest,
    ) -> Result<UpdateAck> {
        let update = grade_update_document(&grade)?;

        let result = self
            .submissions()
            .update_one(doc! { "_id": id }, update)
            .await
            .map_err(|e| StudySyncError::database_operation(format!("批改提交失败: {e}")))?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::Difficulty;
    use crate::models::submissions::entities::{AssignmentSnapshot, SubmissionStatus};

    fn grade_request() -> GradeSubmissionRequest {
        GradeSubmissionRequest {
            assignment: AssignmentSnapshot {
                id: Some("66a00000000000000000abcd".to_string()),
                title: "Algebra".to_string(),
                description: "Solve the set".to_string(),
                difficulty: Difficulty::Easy,
                marks: 10.0,
                image: "http://example.com/a.png".to_string(),
                due_date: "2026-09-01".to_string(),
            },
            submitted_by: "a@x.com".to_string(),
            pdf_link: "http://example.com/answer.pdf".to_string(),
            note: "done".to_string(),
            status: SubmissionStatus::Completed,
            given_mark: Some(9.0),
            feedback: Some("well done".to_string()),
        }
    }

    #[test]
    fn test_grade_update_touches_exactly_the_grading_fields() {
        let update = grade_update_document(&grade_request()).unwrap();
        let set = update.get_document("$set").unwrap();

        let keys: Vec<&str> = set.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "assignment",
                "submittedBy",
                "pdfLink",
                "note",
                "status",
                "givenMark",
                "feedback"
            ]
        );
        // submittedBy 与 pdfLink 覆盖为请求携带的原值，不会丢失
        assert_eq!(set.get_str("submittedBy").unwrap(), "a@x.com");
        assert_eq!(set.get_str("pdfLink").unwrap(), "http://example.com/answer.pdf");
        assert_eq!(set.get_f64("givenMark").unwrap(), 9.0);
        assert_eq!(set.get_str("status").unwrap(), "completed");
    }

    #[test]
    fn test_grade_update_is_idempotent_input() {
        // 同一请求两次生成的 $set 文档完全一致，纯覆盖故幂等
        let first = grade_update_document(&grade_request()).unwrap();
        let second = grade_update_document(&grade_request()).unwrap();
        assert_eq!(first, second);
    }
}

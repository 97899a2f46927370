use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::Difficulty;

// 提交状态
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending, // 待批改
    Completed, // 已批改
}

impl SubmissionStatus {
    pub const PENDING: &'static str = "pending";
    pub const COMPLETED: &'static str = "completed";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::PENDING => Ok(SubmissionStatus::Pending),
            SubmissionStatus::COMPLETED => Ok(SubmissionStatus::Completed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: pending, completed"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "{}", SubmissionStatus::PENDING),
            SubmissionStatus::Completed => write!(f, "{}", SubmissionStatus::COMPLETED),
        }
    }
}

/// 提交时嵌入的作业快照
///
/// 有意的反规范化设计：记录学生提交那一刻的作业内容，之后源作业被
/// 编辑或删除均不回写。id 为客户端持有的十六进制字符串。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSnapshot {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub marks: f64,
    pub image: String,
    pub due_date: String,
}

/// 提交文档
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    // 提交那一刻的作业快照
    pub assignment: AssignmentSnapshot,
    // 学生邮箱，作为身份键
    pub submitted_by: String,
    // 作答 PDF 链接
    pub pdf_link: String,
    // 学生备注
    pub note: String,
    // 批改状态
    #[serde(default)]
    pub status: SubmissionStatus,
    // 得分，批改时写入
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub given_mark: Option<f64>,
    // 评语，批改时写入
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        let json = r#"{
            "assignment": {
                "_id": "66a00000000000000000abcd",
                "title": "Algebra",
                "description": "Solve the set",
                "difficulty": "easy",
                "marks": 10,
                "image": "http://example.com/a.png",
                "dueDate": "2026-09-01"
            },
            "submittedBy": "a@x.com",
            "pdfLink": "http://example.com/answer.pdf",
            "note": "done"
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert!(submission.given_mark.is_none());
        assert!(submission.feedback.is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "assignment": {
                "title": "Algebra",
                "description": "d",
                "difficulty": "medium",
                "marks": 20,
                "image": "i",
                "dueDate": "2026-09-01"
            },
            "submittedBy": "a@x.com",
            "pdfLink": "p",
            "note": "n",
            "status": "completed",
            "givenMark": 18,
            "feedback": "well done"
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.given_mark, Some(18.0));

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["submittedBy"], "a@x.com");
        assert_eq!(value["pdfLink"], "p");
        assert_eq!(value["givenMark"], 18.0);
        assert_eq!(value["status"], "completed");
    }
}

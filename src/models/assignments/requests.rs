use serde::Deserialize;
use std::str::FromStr;

use crate::models::assignments::entities::Difficulty;
use crate::models::common::pagination::PaginationQuery;

/// 创建作业请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub marks: f64,
    pub image: String,
    pub due_date: String,
}

/// 更新作业请求：六个可编辑字段整体替换
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub marks: f64,
    pub image: String,
    pub due_date: String,
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    /// 难度过滤，"all" 或缺省表示不过滤
    pub difficulty: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: i64,
    pub limit: i64,
    pub difficulty: Option<Difficulty>,
}

impl AssignmentListParams {
    /// 解析为存储层查询，无效的难度取值视为请求错误
    pub fn into_query(self) -> Result<AssignmentListQuery, String> {
        let difficulty = match self.difficulty.as_deref() {
            None | Some("all") | Some("") => None,
            Some(value) => Some(Difficulty::from_str(value)?),
        };
        Ok(AssignmentListQuery {
            page: self.pagination.page,
            limit: self.pagination.limit,
            difficulty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_means_no_filter() {
        let params: AssignmentListParams =
            serde_json::from_str(r#"{"page":"1","limit":"6","difficulty":"all"}"#).unwrap();
        let query = params.into_query().unwrap();
        assert!(query.difficulty.is_none());
    }

    #[test]
    fn test_difficulty_filter_parsed() {
        let params: AssignmentListParams =
            serde_json::from_str(r#"{"difficulty":"hard"}"#).unwrap();
        let query = params.into_query().unwrap();
        assert_eq!(query.difficulty, Some(Difficulty::Hard));
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 6);
    }

    #[test]
    fn test_invalid_difficulty_rejected() {
        let params: AssignmentListParams =
            serde_json::from_str(r#"{"difficulty":"extreme"}"#).unwrap();
        assert!(params.into_query().is_err());
    }
}

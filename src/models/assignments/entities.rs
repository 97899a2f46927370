use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// 作业难度
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,   // 简单
    Medium, // 中等
    Hard,   // 困难
}

impl Difficulty {
    pub const EASY: &'static str = "easy";
    pub const MEDIUM: &'static str = "medium";
    pub const HARD: &'static str = "hard";
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Difficulty::EASY => Ok(Difficulty::Easy),
            Difficulty::MEDIUM => Ok(Difficulty::Medium),
            Difficulty::HARD => Ok(Difficulty::Hard),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作业难度: '{s}'. 支持的难度: easy, medium, hard"
            ))),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "{}", Difficulty::EASY),
            Difficulty::Medium => write!(f, "{}", Difficulty::MEDIUM),
            Difficulty::Hard => write!(f, "{}", Difficulty::HARD),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

/// 作业文档，字段名与前端约定的 camelCase 保持一致
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    // 存储生成的唯一 ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 作业难度
    pub difficulty: Difficulty,
    // 作业满分
    pub marks: f64,
    // 封面图 URL
    pub image: String,
    // 截止日期（日期字符串，由前端控制格式）
    pub due_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_roundtrip() {
        assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert!(Difficulty::from_str("impossible").is_err());
    }

    #[test]
    fn test_assignment_wire_format() {
        let json = r#"{
            "title": "Algebra",
            "description": "Solve the set",
            "difficulty": "easy",
            "marks": 10,
            "image": "http://example.com/a.png",
            "dueDate": "2026-09-01"
        }"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert!(assignment.id.is_none());
        assert_eq!(assignment.difficulty, Difficulty::Easy);
        assert_eq!(assignment.marks, 10.0);

        let value = serde_json::to_value(&assignment).unwrap();
        // 插入后再取出应与写入字段一致
        assert_eq!(value["dueDate"], "2026-09-01");
        assert!(value.get("_id").is_none());
        assert!(value.get("due_date").is_none());
    }
}

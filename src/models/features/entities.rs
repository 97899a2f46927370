use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 平台特性介绍条目，只读，由运维在库中预置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
}

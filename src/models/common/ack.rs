use serde::Serialize;

// 写操作确认，字段名与前端约定的驱动确认格式保持一致

/// 插入确认
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub inserted_id: String,
}

/// 更新确认
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// 删除确认
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_wire_field_names() {
        let json = serde_json::to_value(InsertAck {
            inserted_id: "66a00000000000000000abcd".to_string(),
        })
        .unwrap();
        assert!(json.get("insertedId").is_some());

        let json = serde_json::to_value(UpdateAck {
            matched_count: 1,
            modified_count: 1,
        })
        .unwrap();
        assert!(json.get("matchedCount").is_some());
        assert!(json.get("modifiedCount").is_some());

        let json = serde_json::to_value(DeleteAck { deleted_count: 0 }).unwrap();
        assert_eq!(json["deletedCount"], 0);
    }
}

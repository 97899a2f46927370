use serde::Deserialize;
use serde_json::{Map, Value};

/// 会话签发请求（来自HTTP请求）
///
/// 身份负载由调用方给定，形状不做约束，原样进入令牌 Claims。
/// 唯一要求是必须为 JSON 对象。
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest(pub Map<String, Value>);

impl SessionRequest {
    /// 负载中的 email 字段（如有），仅用于日志
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arbitrary_payload_accepted() {
        let request: SessionRequest =
            serde_json::from_str(r#"{"email":"a@x.com","displayName":"Ada","foo":42}"#).unwrap();
        assert_eq!(request.email(), Some("a@x.com"));
        assert_eq!(request.0.len(), 3);
    }

    #[test]
    fn test_non_object_payload_rejected() {
        assert!(serde_json::from_str::<SessionRequest>(r#""just-a-string""#).is_err());
    }
}

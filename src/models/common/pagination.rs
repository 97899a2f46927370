use serde::Deserialize;

// 分页查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub limit: i64,
}

/// 总页数 = ceil(total / limit)
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    1
}

// 前端作业列表每页展示 6 条卡片
fn default_limit() -> i64 {
    6
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, limit: 6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(1, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }

    #[test]
    fn test_total_pages_zero_limit() {
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_defaults() {
        let query = PaginationQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 6);
    }

    #[test]
    fn test_deserialize_string_values() {
        // 查询字符串中的数字以字符串形式到达
        let query: PaginationQuery = serde_json::from_str(r#"{"page":"2","limit":"10"}"#).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let query: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 6);
    }
}

//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_studysync_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum StudySyncError {
            $($variant(String),)*
        }

        impl StudySyncError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(StudySyncError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(StudySyncError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(StudySyncError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl StudySyncError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        StudySyncError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_studysync_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    ObjectIdParse("E004", "ObjectId Parse Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    Authentication("E008", "Authentication Error"),
    Authorization("E009", "Authorization Error"),
}

impl StudySyncError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for StudySyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for StudySyncError {}

// 为常见的错误类型实现 From trait
impl From<mongodb::error::Error> for StudySyncError {
    fn from(err: mongodb::error::Error) -> Self {
        StudySyncError::DatabaseOperation(err.to_string())
    }
}

impl From<mongodb::bson::oid::Error> for StudySyncError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        StudySyncError::ObjectIdParse(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StudySyncError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StudySyncError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for StudySyncError {
    fn from(err: serde_json::Error) -> Self {
        StudySyncError::Serialization(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for StudySyncError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        StudySyncError::Authentication(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudySyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StudySyncError::database_config("test").code(), "E001");
        assert_eq!(StudySyncError::object_id_parse("test").code(), "E004");
        assert_eq!(StudySyncError::validation("test").code(), "E005");
        assert_eq!(StudySyncError::authentication("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            StudySyncError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            StudySyncError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = StudySyncError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = StudySyncError::not_found("Assignment missing");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Assignment missing"));
    }

    #[test]
    fn test_from_object_id_error() {
        let parse_err = mongodb::bson::oid::ObjectId::parse_str("not-an-oid").unwrap_err();
        let err: StudySyncError = parse_err.into();
        assert_eq!(err.code(), "E004");
    }
}

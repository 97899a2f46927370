pub mod assignments;
pub mod auth;
pub mod common;
pub mod features;
pub mod submissions;

pub use common::ack::{DeleteAck, InsertAck, UpdateAck};
pub use common::pagination::{PaginationQuery, total_pages};
pub use common::response::ApiResponse;

/// 程序启动时间，用于启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 统一业务错误码
///
/// 规则：HTTP 状态码 * 100 + 两位业务序号，0 表示成功。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 40000,
    Unauthorized = 40100,
    NotFound = 40400,
    AssignmentNotFound = 40401,
    SubmissionNotFound = 40402,
    InternalServerError = 50000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::AssignmentNotFound as i32, 40401);
    }
}

use serde::Serialize;

/// 会话签发 / 注销响应
///
/// /jwt 与 /logout 均只返回 `{success: true}`，令牌本身
/// 只经由 HttpOnly Cookie 下发。
#[derive(Debug, Serialize)]
pub struct SessionIssuedResponse {
    pub success: bool,
}

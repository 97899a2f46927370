use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use futures_util::future::{Ready, ready};
use mongodb::bson::oid::ObjectId;

use crate::models::{ApiResponse, ErrorCode};

/// 路径参数 `{id}` 的安全提取器
///
/// 非法的 ObjectId 直接以 400 响应拒绝，不进入业务层。
#[derive(Debug, Clone, Copy)]
pub struct SafeObjectId(pub ObjectId);

impl FromRequest for SafeObjectId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().query("id");
        ready(match ObjectId::parse_str(raw) {
            Ok(oid) => Ok(SafeObjectId(oid)),
            Err(_) => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!("无效的文档 ID: '{raw}'"),
                ));
                Err(InternalError::from_response("invalid object id", response).into())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_object_id_accepted() {
        let req = TestRequest::default()
            .param("id", "66a00000000000000000abcd")
            .to_http_request();
        let extracted = SafeObjectId::extract(&req).await.unwrap();
        assert_eq!(extracted.0.to_hex(), "66a00000000000000000abcd");
    }

    #[actix_web::test]
    async fn test_malformed_object_id_rejected() {
        let req = TestRequest::default().param("id", "not-an-oid").to_http_request();
        assert!(SafeObjectId::extract(&req).await.is_err());
    }
}

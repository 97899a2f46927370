use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// 会话 Claims 结构体
//
// 调用方提供的身份负载原样展开到 Claims 顶层，附加标准过期字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub identity: Map<String, Value>,
    pub exp: usize, // Expiration time (时间戳)
    pub iat: usize, // Issued at (签发时间)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成会话令牌，有效期由配置决定（默认 1 小时）
    pub fn generate_session_token(
        identity: &Map<String, Value>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();
        let expiration = now + chrono::Duration::minutes(config.jwt.token_expiry);

        // exp / iat 是保留字段，负载里同名的键会与结构体字段冲突、
        // 产生重复的 JSON 键，签发前剔除
        let mut identity = identity.clone();
        identity.remove("exp");
        identity.remove("iat");

        let claims = SessionClaims {
            identity,
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证会话令牌的签名与有效期
    pub fn verify_session_token(
        token: &str,
    ) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<SessionClaims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    fn build_session_cookie(
        value: String,
        max_age: actix_web::cookie::time::Duration,
    ) -> Cookie<'static> {
        let config = AppConfig::get();
        // 生产环境前端跨站部署走 HTTPS，开发环境保持严格同站
        let same_site = if config.is_production() {
            SameSite::None
        } else {
            SameSite::Strict
        };
        Cookie::build(config.jwt.cookie_name.clone(), value)
            .path("/")
            .max_age(max_age)
            .same_site(same_site)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 创建会话 Cookie
    pub fn create_session_cookie(token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Self::build_session_cookie(
            token.to_string(),
            actix_web::cookie::time::Duration::minutes(config.jwt.token_expiry),
        )
    }

    /// 创建空的会话 Cookie（用于注销）
    ///
    /// 属性必须与签发时一致，否则浏览器不会清除。
    pub fn create_empty_session_cookie() -> Cookie<'static> {
        Self::build_session_cookie(String::new(), actix_web::cookie::time::Duration::seconds(0))
    }

    /// 从请求中提取会话令牌
    pub fn extract_session_token(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(&AppConfig::get().jwt.cookie_name)
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn identity() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("email".into(), Value::String("a@x.com".into()));
        map.insert("displayName".into(), Value::String("Ada".into()));
        map
    }

    #[test]
    fn test_token_roundtrip_preserves_identity() {
        let token = JwtUtils::generate_session_token(&identity()).unwrap();
        let claims = JwtUtils::verify_session_token(&token).unwrap();
        assert_eq!(claims.identity.get("email").and_then(Value::as_str), Some("a@x.com"));
        assert_eq!(
            claims.identity.get("displayName").and_then(Value::as_str),
            Some("Ada")
        );
    }

    #[test]
    fn test_token_expiry_matches_config() {
        let token = JwtUtils::generate_session_token(&identity()).unwrap();
        let claims = JwtUtils::verify_session_token(&token).unwrap();
        let expiry_minutes = AppConfig::get().jwt.token_expiry as usize;
        assert_eq!(claims.exp - claims.iat, expiry_minutes * 60);
    }

    #[test]
    fn test_reserved_claim_keys_stripped_from_identity() {
        let mut payload = identity();
        payload.insert("exp".into(), Value::from(1));
        payload.insert("iat".into(), Value::from(1));

        let token = JwtUtils::generate_session_token(&payload).unwrap();
        let claims = JwtUtils::verify_session_token(&token).unwrap();

        // exp/iat 以服务端签发的时间戳为准，负载里的同名键不得进入身份
        assert!(claims.identity.get("exp").is_none());
        assert!(claims.identity.get("iat").is_none());
        assert!(claims.exp > 1);
        assert_eq!(claims.identity.get("email").and_then(Value::as_str), Some("a@x.com"));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = JwtUtils::generate_session_token(&identity()).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(JwtUtils::verify_session_token(&tampered).is_err());
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = JwtUtils::create_session_cookie("sometoken");
        assert_eq!(cookie.name(), AppConfig::get().jwt.cookie_name);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));

        let cleared = JwtUtils::create_empty_session_cookie();
        assert_eq!(cleared.name(), cookie.name());
        assert_eq!(cleared.value(), "");
        assert_eq!(
            cleared.max_age(),
            Some(actix_web::cookie::time::Duration::seconds(0))
        );
        // 清除 Cookie 的其余属性必须与签发时一致
        assert_eq!(cleared.http_only(), cookie.http_only());
        assert_eq!(cleared.same_site(), cookie.same_site());
        assert_eq!(cleared.secure(), cookie.secure());
    }
}

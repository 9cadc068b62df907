use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::{auth::jwt::JwtKeys, error::ApiError};

/// Cookie carrying the session JWT.
pub const TOKEN_COOKIE: &str = "token";

/// Extracts and validates the JWT from the `token` cookie, returning the
/// caller's user id. A missing cookie answers 401; a cookie that fails
/// verification answers 400. The frontend depends on that split.
#[derive(Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|raw| cookie_value(raw, TOKEN_COOKIE))
            .ok_or_else(|| {
                ApiError::Unauthorized("Access denied. No token provided.".to_string())
            })?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token verification failed");
            ApiError::BadRequest("Invalid token.".to_string())
        })?;

        Ok(AuthUser(claims.sub))
    }
}

/// Find a cookie value in a raw `Cookie` header.
fn cookie_value<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use axum::http::{header, Request};

    #[derive(Clone)]
    struct TestState {
        jwt: JwtConfig,
    }

    impl FromRef<TestState> for JwtKeys {
        fn from_ref(state: &TestState) -> Self {
            JwtKeys::from_config(&state.jwt)
        }
    }

    fn test_state() -> TestState {
        TestState {
            jwt: JwtConfig {
                secret: "dev-secret".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 60,
            },
        }
    }

    fn parts_with_cookie(cookie: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/portfolio");
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        builder.body(()).expect("request").into_parts().0
    }

    #[test]
    fn cookie_value_finds_named_cookie() {
        assert_eq!(cookie_value("token=abc", "token"), Some("abc"));
        assert_eq!(cookie_value("a=1; token=abc; b=2", "token"), Some("abc"));
        assert_eq!(cookie_value("a=1;  token=abc", "token"), Some("abc"));
        assert_eq!(cookie_value("a=1; b=2", "token"), None);
        assert_eq!(cookie_value("", "token"), None);
    }

    #[tokio::test]
    async fn missing_cookie_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_cookie(None);
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
        assert_eq!(err.to_string(), "Access denied. No token provided.");
    }

    #[tokio::test]
    async fn unrelated_cookies_are_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_cookie(Some("session=abc; theme=dark"));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn tampered_token_is_bad_request() {
        let state = test_state();
        let mut parts = parts_with_cookie(Some("token=garbage.token.here"));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.to_string(), "Invalid token.");
    }

    #[tokio::test]
    async fn wrong_secret_token_is_bad_request() {
        let state = test_state();
        let other = JwtKeys::from_config(&JwtConfig {
            secret: "other-secret".into(),
            issuer: "test-issuer".into(),
            audience: "test-aud".into(),
            ttl_minutes: 60,
        });
        let token = other.sign(Uuid::new_v4()).expect("sign");
        let mut parts = parts_with_cookie(Some(&format!("token={token}")));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn valid_token_yields_user_id() {
        let state = test_state();
        let user_id = Uuid::new_v4();
        let token = JwtKeys::from_ref(&state).sign(user_id).expect("sign");
        let mut parts = parts_with_cookie(Some(&format!("a=1; token={token}; b=2")));
        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(extracted, user_id);
    }
}

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;

use crate::error::WebError;

/// Rejects requests that do not carry a configured bearer API key.
pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match token {
        Some(token) if api_keys.is_valid(token) => Ok(next.run(req).await),
        _ => {
            tracing::warn!("Invalid API key attempt");
            Err(WebError::Unauthorized)
        }
    }
}

#[derive(Clone)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::post};
    use tower::ServiceExt;

    fn app(keys: &str) -> Router {
        Router::new()
            .route("/", post(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(
                ApiKeys::from_comma_separated(keys),
                require_auth,
            ))
    }

    fn request(authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_parses_comma_separated_keys() {
        let keys = ApiKeys::from_comma_separated(" alpha, ,beta ,");

        assert!(keys.is_valid("alpha"));
        assert!(keys.is_valid("beta"));
        assert!(!keys.is_valid(""));
        assert!(!keys.is_valid("gamma"));
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let response = app("alpha").oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_key_is_rejected() {
        let response = app("alpha")
            .oneshot(request(Some("Bearer beta")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_no_configured_keys_rejects_everything() {
        let response = app("").oneshot(request(Some("Bearer "))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_key_is_accepted() {
        let response = app("alpha,beta")
            .oneshot(request(Some("Bearer beta")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

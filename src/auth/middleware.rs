//! Authentication middleware and extractors

use crate::auth::Authenticator;
use crate::error::{Error, Result};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Pull the bearer token out of the Authorization header
pub fn extract_bearer_token(req: &Request) -> Result<&str> {
    if let Some(auth_header) = req.headers().get("Authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Ok(token);
            }
        }
    }

    Err(Error::InvalidToken(
        "missing bearer token in Authorization header".to_string(),
    ))
}

/// Middleware for requiring a valid session token
pub async fn require_auth(
    State(authenticator): State<Arc<Authenticator>>,
    req: Request,
    next: Next,
) -> std::result::Result<Response, Error> {
    let token = extract_bearer_token(&req)?;
    authenticator.verify(token)?;
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use axum::http::Request;

        let req = Request::builder()
            .method("POST")
            .uri("/caption")
            .header("Authorization", "Bearer abc.def.ghi")
            .body(axum::body::Body::empty())
            .unwrap();

        let token = extract_bearer_token(&req).expect("Failed to extract token");
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_extract_bearer_token_missing_header() {
        use axum::http::Request;

        let req = Request::builder()
            .method("POST")
            .uri("/caption")
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_bearer_token(&req).is_err());
    }

    #[test]
    fn test_extract_bearer_token_wrong_scheme() {
        use axum::http::Request;

        let req = Request::builder()
            .method("POST")
            .uri("/caption")
            .header("Authorization", "Basic YWRtaW46c2VjcmV0")
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_bearer_token(&req).is_err());
    }
}

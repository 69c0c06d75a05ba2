use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

/// Request-scope record carrying the authenticated subject identity.
///
/// Constructed by the gate, read by downstream handlers via request
/// extensions, and dropped when the request completes. Never persisted.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Authentication gate for protected routes.
///
/// Runs strictly before the wrapped handler: extracts the bearer token,
/// validates it, and either short-circuits with a 401 or forwards the
/// request untouched with the authenticated identity attached. Token
/// failure sub-reasons are logged but never distinguished to the client.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let user_id = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Token validation failed");
        unauthorized("Invalid or expired token")
    })?;

    tracing::debug!(user_id, "Request authenticated");

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized("Missing Authorization header")
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized("Invalid Authorization header")
    })?;

    if auth_str.is_empty() {
        tracing::warn!("Empty Authorization header");
        return Err(unauthorized("Missing Authorization header"));
    }

    // Exact scheme match: case-sensitive "Bearer" followed by a single space
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        tracing::warn!("Malformed Authorization header");
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    };

    Ok(token)
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::body::Body;
    use axum::http::header::AUTHORIZATION;
    use axum::http::Request as HttpRequest;
    use axum::middleware;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.user_id.to_string()
    }

    fn protected_router(authenticator: Arc<Authenticator>) -> Router {
        Router::new()
            .route("/protected", get(whoami))
            .layer(middleware::from_fn_with_state(authenticator, authenticate))
    }

    async fn send(router: Router, auth_header: Option<&str>) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().uri("/protected");
        if let Some(value) = auth_header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_missing_authorization_header() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));

        let (status, body) = send(protected_router(authenticator), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Missing Authorization header"));
    }

    #[tokio::test]
    async fn test_empty_authorization_header() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));

        let (status, body) = send(protected_router(authenticator), Some("")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Missing Authorization header"));
    }

    #[tokio::test]
    async fn test_wrong_scheme() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));

        let (status, body) = send(protected_router(authenticator), Some("Token xyz")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("header format"));
    }

    #[tokio::test]
    async fn test_lowercase_bearer_rejected() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let token = authenticator.issue_token(42).unwrap();

        let (status, body) = send(
            protected_router(authenticator),
            Some(&format!("bearer {token}")),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("header format"));
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));

        let (status, body) =
            send(protected_router(authenticator), Some("Bearer garbage")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Invalid or expired token"));
    }

    #[tokio::test]
    async fn test_expired_token() {
        // Issued already expired; the gate reports the uniform message
        let expired_issuer = Authenticator::new(SECRET, -1);
        let token = expired_issuer.issue_token(42).unwrap();

        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let (status, body) = send(
            protected_router(authenticator),
            Some(&format!("Bearer {token}")),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Invalid or expired token"));
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_identity() {
        let authenticator = Arc::new(Authenticator::new(SECRET, 24));
        let token = authenticator.issue_token(42).unwrap();

        let (status, body) = send(
            protected_router(authenticator),
            Some(&format!("Bearer {token}")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "42");
    }
}

//! Greeting endpoint
//!
//! One scalar read per request against the shared store view. Any store
//! failure comes back as a 500 carrying the error text.

use axum::{extract::State, routing::get, Router};

use crate::http::error::ApiError;
use crate::state::AppState;

/// The scalar the greeting is built from: the most recently created user.
const GREETING_QUERY: &str =
    "SELECT user_name FROM user_info ORDER BY created_at DESC LIMIT 1";

/// GET /hello - greet the latest user
async fn hello(State(state): State<AppState>) -> Result<String, ApiError> {
    let name = state.reader().read_scalar(GREETING_QUERY).await?;
    Ok(format!("hi {} \n", name))
}

/// Greeting routes
pub fn router() -> Router<AppState> {
    Router::new().route("/hello", get(hello))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::db::{DbError, ScalarReader};

    /// Reader stub: a canned name or a canned scan failure.
    enum StubReader {
        Name(&'static str),
        ScanFailure,
    }

    impl StubReader {
        fn scan_error() -> DbError {
            DbError::Scan(sqlx::Error::RowNotFound)
        }
    }

    #[async_trait]
    impl ScalarReader for StubReader {
        async fn read_scalar(&self, _sql: &str) -> Result<String, DbError> {
            match self {
                Self::Name(name) => Ok((*name).to_string()),
                Self::ScanFailure => Err(Self::scan_error()),
            }
        }
    }

    fn app(reader: StubReader) -> Router {
        router().with_state(AppState::with_reader(Arc::new(reader)))
    }

    fn get_hello() -> Request<Body> {
        Request::get("/hello").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn greets_the_stored_name() {
        let response = app(StubReader::Name("bob")).oneshot(get_hello()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"hi bob \n");
    }

    #[tokio::test]
    async fn greeting_keeps_exact_spacing() {
        let response = app(StubReader::Name("Alice Smith"))
            .oneshot(get_hello())
            .await
            .unwrap();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"hi Alice Smith \n");
    }

    #[tokio::test]
    async fn scan_failure_is_500_with_error_text() {
        let response = app(StubReader::ScanFailure).oneshot(get_hello()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], StubReader::scan_error().to_string().as_bytes());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let request = Request::get("/goodbye").body(Body::empty()).unwrap();
        let response = app(StubReader::Name("bob")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

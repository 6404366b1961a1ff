//! Router

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use tipjar_core::api::CREATE_CHECKOUT_SESSION_PATH;

use crate::handlers::{create_checkout_session, health_check};
use crate::state::AppState;

/// Build the application router
///
/// API routes are matched first; every other path is served from the web
/// frontend build, falling back to its `index.html` so `/` and `/success`
/// are routed client-side. The page and the API share one origin, so no
/// CORS headers are sent.
pub fn router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.static_dir);
    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route(CREATE_CHECKOUT_SESSION_PATH, post(create_checkout_session))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use tipjar_payments::{CheckoutGateway, CheckoutSessionId, DonationCheckoutParams};

    use super::*;
    use crate::config::ServerConfig;

    struct UnusedGateway;

    #[async_trait]
    impl CheckoutGateway for UnusedGateway {
        async fn create_session(
            &self,
            _params: &DonationCheckoutParams,
        ) -> tipjar_payments::Result<CheckoutSessionId> {
            unreachable!("page routes never create sessions")
        }

        fn name(&self) -> &'static str {
            "unused"
        }
    }

    fn app(static_dir: &Path) -> Router {
        router(AppState {
            gateway: Arc::new(UnusedGateway),
            config: Arc::new(ServerConfig {
                static_dir: static_dir.to_string_lossy().into_owned(),
                ..ServerConfig::default()
            }),
        })
    }

    async fn get_page(static_dir: &Path, uri: &str) -> (StatusCode, String) {
        let app = app(static_dir);

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_pages_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>tipjar</html>").unwrap();
        std::fs::write(dir.path().join("tipjar-web.js"), "// bundle").unwrap();

        for uri in ["/", "/success?amount=3000"] {
            let (status, body) = get_page(dir.path(), uri).await;
            assert_eq!(status, StatusCode::OK, "uri = {uri}");
            assert_eq!(body, "<html>tipjar</html>");
        }

        let (status, body) = get_page(dir.path(), "/tipjar-web.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "// bundle");
    }

    #[tokio::test]
    async fn test_cross_origin_requests_get_no_cors_headers() {
        let dir = tempfile::tempdir().unwrap();

        let preflight = app(dir.path())
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/create-checkout-session")
                    .header("origin", "https://elsewhere.example")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(preflight.headers().get("access-control-allow-origin").is_none());

        let health = app(dir.path())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "https://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
        assert!(health.headers().get("access-control-allow-origin").is_none());
    }
}

//! Mock HTTP server
//!
//! Speaks the upstream API's protocol: `POST` a JSON body with `q` (and
//! optionally `type`, `num`, `page`, `gl`, `hl`) to any category route and
//! get a synthesized result back.

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method},
    routing::post,
    Json, Router,
};
use serper_common::{bad_request, ApiResult};
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::category::Category;
use crate::config::Config;
use crate::options::SearchRequest;
use crate::synth::ResponseSynthesizer;
use crate::types::SearchResult;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub synth: ResponseSynthesizer,
}

/// Create the router with all category routes
pub fn create_router(synth: ResponseSynthesizer, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // The category comes from the body, not the path
    let mut router = Router::new();
    for category in Category::ALL {
        router = router.route(&format!("/{}", category), post(search_handler));
    }

    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { synth })
}

/// Handle a search request on any category route
async fn search_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SearchResult>> {
    let request: SearchRequest =
        serde_json::from_slice(&body).map_err(|_| bad_request("Invalid request body"))?;

    if request.q.is_empty() {
        return Err(bad_request("Query parameter 'q' is required"));
    }

    let category = request.category();
    tracing::info!("Mock {} search for: {}", category, request.q);

    Ok(Json(state.synth.generate_category(&request.q, category)))
}

/// A bound, not yet running, mock server
pub struct MockServer {
    listener: TcpListener,
    router: Router,
}

impl MockServer {
    /// Bind to `addr` (port 0 picks a free port)
    pub async fn bind(
        addr: SocketAddr,
        synth: ResponseSynthesizer,
        request_timeout: Duration,
    ) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            router: create_router(synth, request_timeout),
        })
    }

    /// Bind using the server and synth sections of the configuration
    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::bind(
            config.server.addr()?,
            config.synth.build(),
            config.server.request_timeout(),
        )
        .await
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until ctrl-c
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        tracing::info!("Mock Serper API server started on http://{}", addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("Mock server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serper_common::ErrorResponse;
    use tower::ServiceExt;

    use crate::synth::FixedDice;

    fn app() -> Router {
        create_router(
            ResponseSynthesizer::new().with_dice(FixedDice(99)),
            Duration::from_secs(10),
        )
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_search_defaults_to_web() {
        let response = app()
            .oneshot(post_json("/search", r#"{"q": "kubernetes"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );

        let result: SearchResult = read_body(response).await;
        assert_eq!(result.search_parameters.q, "kubernetes");
        assert_eq!(result.category(), Category::Search);
        assert_eq!(result.organic.len(), 5);
        assert!(result.knowledge_graph.is_some());
    }

    #[tokio::test]
    async fn test_type_in_body_selects_category() {
        // Path does not matter, only the body type
        let response = app()
            .oneshot(post_json("/search", r#"{"q": "kubernetes", "type": "images", "num": 10}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: SearchResult = read_body(response).await;
        assert_eq!(result.category(), Category::Images);
        assert_eq!(result.images.len(), 2);
        assert!(result.organic.is_empty());
    }

    #[tokio::test]
    async fn test_all_category_routes_exist() {
        for category in Category::ALL {
            let uri = format!("/{}", category);
            let response = app()
                .oneshot(post_json(&uri, r#"{"q": "rust"}"#))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_missing_query_is_rejected() {
        for body in [r#"{"q": ""}"#, r#"{"type": "news"}"#] {
            let response = app().oneshot(post_json("/search", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let error: ErrorResponse = read_body(response).await;
            assert_eq!(error.error, "Query parameter 'q' is required");
        }
    }

    #[tokio::test]
    async fn test_invalid_body_is_rejected() {
        let response = app()
            .oneshot(post_json("/news", "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = read_body(response).await;
        assert_eq!(error.error, "Invalid request body");
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/search")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/search")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        let headers = response.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");

        let methods = headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        for method in ["POST", "GET", "OPTIONS"] {
            assert!(methods.contains(method), "{} missing from {}", method, methods);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(post_json("/shopping", r#"{"q": "rust"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

//! Integration tests for the mock server
//!
//! Binds the server on an ephemeral local port and drives it with the
//! HTTP-backed client, the same path downstream code takes against the
//! real API.

use std::net::SocketAddr;
use std::time::Duration;

use serper_mock::config::ClientConfig;
use serper_mock::synth::FixedDice;
use serper_mock::{
    Category, MockServer, ResponseSynthesizer, SearchOptions, SerperClient, SerperError,
};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct RunningServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl RunningServer {
    async fn start(roll: u32) -> Self {
        let server = MockServer::bind(
            "127.0.0.1:0".parse().unwrap(),
            ResponseSynthesizer::new().with_dice(FixedDice(roll)),
            Duration::from_secs(10),
        )
        .await
        .expect("bind mock server");
        let addr = server.local_addr().unwrap();

        let (stop, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_with_shutdown(async {
            let _ = rx.await;
        }));

        Self { addr, stop, handle }
    }

    fn client(&self) -> SerperClient {
        let config = ClientConfig {
            mock_mode: false,
            api_key: "test-key".to_string(),
            endpoint: format!("http://{}/search", self.addr),
            timeout_secs: 5,
        };
        SerperClient::upstream(&config).unwrap()
    }

    async fn stop(self) {
        self.stop.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn web_search_over_http() {
    let server = RunningServer::start(99).await;

    let result = server
        .client()
        .search("什么是gRPC", SearchOptions::new().with_num(10))
        .await
        .unwrap();

    assert_eq!(result.search_parameters.q, "什么是gRPC");
    assert_eq!(result.category(), Category::Search);
    let positions: Vec<u32> = result.organic.iter().map(|o| o.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    assert_eq!(result.organic[0].sitelinks.len(), 2);
    assert_eq!(result.related_searches.len(), 5);
    assert!(result.knowledge_graph.is_some());
    assert_eq!(result.answer_box.unwrap().title, "gRPC 的定义");

    server.stop().await;
}

#[tokio::test]
async fn category_searches_over_http() {
    let server = RunningServer::start(0).await;
    let client = server.client();

    let images = client
        .search_images("kubernetes", SearchOptions::new())
        .await
        .unwrap();
    let widths: Vec<u32> = images.images.iter().map(|i| i.width).collect();
    assert_eq!(widths, vec![800, 1024]);
    assert!(images.organic.is_empty());

    let videos = client.search_videos("kubernetes", SearchOptions::new()).await.unwrap();
    assert_eq!(videos.videos.len(), 2);

    let news = client.search_news("kubernetes", SearchOptions::new()).await.unwrap();
    assert_eq!(news.news.len(), 2);
    assert_eq!(news.news[0].date.len(), "YYYY-MM-DD".len());

    let places = client.search_places("kubernetes", SearchOptions::new()).await.unwrap();
    assert_eq!(places.places[0].reviews, 128);
    assert_eq!(places.places[1].reviews, 256);

    server.stop().await;
}

#[tokio::test]
async fn empty_query_surfaces_status_error() {
    let server = RunningServer::start(0).await;

    let err = server
        .client()
        .search("", SearchOptions::new())
        .await
        .unwrap_err();

    match err {
        SerperError::Status { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("Query parameter 'q' is required"), "{}", body);
        }
        other => panic!("expected status error, got {:?}", other),
    }

    server.stop().await;
}

#[tokio::test]
async fn unreachable_endpoint_is_request_error() {
    // Bind then drop to get a port nothing listens on
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let config = ClientConfig {
        mock_mode: false,
        api_key: String::new(),
        endpoint: format!("http://{}/search", addr),
        timeout_secs: 2,
    };
    let err = SerperClient::upstream(&config)
        .unwrap()
        .search("rust", SearchOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SerperError::Request(_)), "{:?}", err);
}

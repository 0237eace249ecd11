use std::net::{SocketAddr, TcpListener};

use news_api::{
    init_db, make_router,
    seed::{seed, SeedData},
    serve,
};
use tempfile::TempDir;

const TEST_DATA: &str = include_str!("../../data/test_data.json");

/// A seeded server on an ephemeral port, backed by its own database file.
pub struct TestApp {
    pub address: SocketAddr,
    pub client: reqwest::Client,
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> TestApp {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("news.db").display());
        let pool = init_db(&url).await.expect("failed to initialise database");
        let data = SeedData::from_json(TEST_DATA).expect("test data is valid JSON");
        seed(&pool, &data).await.expect("failed to seed");

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        let address = listener.local_addr().expect("listener has no address");
        tokio::spawn(serve(make_router(), listener, pool));

        TestApp {
            address,
            client: reqwest::Client::new(),
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn patch(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .patch(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("request failed")
    }

    /// Sends `body` as-is, with an optional content type.
    pub async fn send_raw(
        &self,
        method: reqwest::Method,
        path: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> reqwest::Response {
        let mut request = self.client.request(method, self.url(path)).body(body);
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        request.send().await.expect("request failed")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("request failed")
    }
}

/// Asserts the status and returns the `msg` of an error body.
pub async fn error_message(response: reqwest::Response, status: u16) -> String {
    assert_eq!(response.status().as_u16(), status);
    let body: news_api::RequestErrorJson = response.json().await.expect("error body is JSON");
    body.msg
}

//! Shared test harness: the real router on an ephemeral port, backed by the in-memory store.
#![allow(dead_code)]

use portfolio_cms::transport::http::{create_router, AppState};
use portfolio_cms::{MemoryDocumentStore, PortfolioService};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub service: Arc<PortfolioService>,
    server: JoinHandle<()>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json(&self, path: &str) -> Result<(u16, serde_json::Value), reqwest::Error> {
        let resp = self.client.get(self.url(path)).send().await?;
        let status = resp.status().as_u16();
        Ok((status, resp.json().await?))
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<(u16, serde_json::Value), reqwest::Error> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        let status = resp.status().as_u16();
        Ok((status, resp.json().await?))
    }

    pub async fn put_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<(u16, serde_json::Value), reqwest::Error> {
        let resp = self.client.put(self.url(path)).json(body).send().await?;
        let status = resp.status().as_u16();
        Ok((status, resp.json().await?))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Starts the API in-process. With `seed`, empty collections get the default content.
pub async fn spawn_app(seed: bool) -> Result<TestApp, Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryDocumentStore::new());
    let service = Arc::new(PortfolioService::new(store));
    service.prepare(seed).await?;

    let router = create_router(AppState::new(service.clone()));

    // Bind to an ephemeral port to avoid conflicts between tests.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(TestApp {
        base_url: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
        service,
        server,
    })
}

/// True when `id` looks like `<prefix>-<digits>`.
pub fn is_generated_id(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

pub mod store_checks;

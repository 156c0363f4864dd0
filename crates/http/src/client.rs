use std::time::Duration;

use crate::{Error, HttpClient, StatusError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// `HttpClient` backed by `reqwest`, rooted at a base URL.
///
/// Paths passed to the trait methods are joined verbatim onto the base, so
/// callers build them with a leading slash (`/events?page=2`).
#[derive(Clone)]
pub struct ReqwestClient {
    base_url: String,
    bearer_token: Option<String>,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("bitsa-data-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("http client");

        Self {
            base_url: base_url.into(),
            bearer_token: None,
            client,
        }
    }

    /// Attach a bearer token to every request (admin endpoints require one).
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn run(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, Error> {
        let request = match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Box::new(StatusError {
                status: status.as_u16(),
                body: bytes.to_vec(),
            }));
        }

        Ok(bytes.to_vec())
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        self.run(self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str, body: Vec<u8>, content_type: &str) -> Result<Vec<u8>, Error> {
        let request = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body);
        self.run(request).await
    }

    async fn put(&self, path: &str, body: Vec<u8>, content_type: &str) -> Result<Vec<u8>, Error> {
        let request = self
            .client
            .put(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body);
        self.run(request).await
    }

    async fn delete(&self, path: &str) -> Result<Vec<u8>, Error> {
        self.run(self.client.delete(self.url(path))).await
    }
}

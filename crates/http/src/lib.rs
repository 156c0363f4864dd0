mod client;

pub use client::ReqwestClient;

use std::future::Future;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Non-2xx response, carried with the raw body so callers can extract the
/// backend's error message without the transport layer knowing its schema.
#[derive(Debug, thiserror::Error)]
#[error("unexpected status {status}")]
pub struct StatusError {
    pub status: u16,
    pub body: Vec<u8>,
}

pub trait HttpClient: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn delete(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

use std::time::Duration;

use bytes::Bytes;
use reqwest::{StatusCode, Url};
use tracing::info;

use crate::error::ConvertError;

#[async_trait::async_trait]
pub trait IDownloadService: Send + Sync {
    async fn download_source_bytes(&self, source_uri: &Url) -> Result<Bytes, ConvertError>;
}

/// Single-attempt fetch over a client shared by all requests.
pub struct DownloadService {
    client: reqwest::Client,
}

impl DownloadService {
    pub fn build(fetch_timeout: Duration) -> Result<Self, &'static str> {
        let client = reqwest::Client::builder().timeout(fetch_timeout).build().map_err(|_| "could not build http client")?;
        Ok(DownloadService { client })
    }
}

#[async_trait::async_trait]
impl IDownloadService for DownloadService {
    async fn download_source_bytes(&self, source_uri: &Url) -> Result<Bytes, ConvertError> {
        let response = self.client.get(source_uri.clone()).send().await.map_err(|e| ConvertError::Fetch(e.to_string()))?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ConvertError::UpstreamStatus(status.as_u16()));
        }
        let bytes = response.bytes().await.map_err(|e| ConvertError::Fetch(e.to_string()))?;
        info!("Downloaded {} bytes from {}", bytes.len(), source_uri);
        Ok(bytes)
    }
}

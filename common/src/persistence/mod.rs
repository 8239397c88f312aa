use crate::error::ConvertError;

pub mod s3;

#[async_trait::async_trait]
pub trait IFileStorage: Send + Sync {
    /// Uploads `source` under `key` and returns the public URL of the stored object.
    async fn store_result_file(&self, key: &str, mime_type: &str, source: Vec<u8>) -> Result<String, ConvertError>;
}

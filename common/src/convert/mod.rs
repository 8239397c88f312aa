use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use crate::{
    download::IDownloadService,
    error::ConvertError,
    models::{ConversionRequest, ImageSource, StoredImageResult},
    persistence::IFileStorage,
    util::{keys::object_key, serialize::base64::decode_inline, state::ConvertSettings},
};

pub mod jpeg;

pub struct ConvertService {
    pub download_service: Arc<dyn IDownloadService>,
    pub file_storage: Arc<dyn IFileStorage>,
    pub settings: ConvertSettings,
}

impl ConvertService {
    /// Acquire, decode, flatten to RGB, encode as JPEG and upload.
    #[tracing::instrument(skip(self, request))]
    pub async fn convert_to_jpg(&self, request: ConversionRequest) -> Result<StoredImageResult, ConvertError> {
        let source = request.into_source()?;
        let source_bytes = self.acquire(source).await?;

        let quality = self.settings.jpeg_quality;
        let converted = tokio::task::spawn_blocking(move || jpeg::to_jpeg(&source_bytes, quality))
            .await
            .map_err(|e| ConvertError::Codec(e.to_string()))??;
        info!("Converted {}x{} {:?} image to {} KiB jpeg", converted.width, converted.height, converted.source_format, converted.bytes.len() / 1024);

        let key = object_key(self.settings.random_key_suffix);
        let image_url = self.file_storage.store_result_file(&key, mime::IMAGE_JPEG.as_ref(), converted.bytes).await?;
        Ok(StoredImageResult { image_url, key })
    }

    async fn acquire(&self, source: ImageSource) -> Result<Bytes, ConvertError> {
        match source {
            ImageSource::Url(url) => self.download_service.download_source_bytes(&url).await,
            ImageSource::Inline(data) => decode_inline(&data).map(Bytes::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use reqwest::Url;

    use super::*;

    struct NoDownload;

    #[async_trait::async_trait]
    impl IDownloadService for NoDownload {
        async fn download_source_bytes(&self, _source_uri: &Url) -> Result<Bytes, ConvertError> {
            Err(ConvertError::Fetch("offline".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingStorage {
        stored: Mutex<Vec<(String, String, usize)>>,
    }

    #[async_trait::async_trait]
    impl IFileStorage for RecordingStorage {
        async fn store_result_file(&self, key: &str, mime_type: &str, source: Vec<u8>) -> Result<String, ConvertError> {
            self.stored.lock().unwrap().push((key.to_string(), mime_type.to_string(), source.len()));
            Ok(format!("https://bucket.s3.region.amazonaws.com/{}", key))
        }
    }

    fn service(storage: Arc<RecordingStorage>) -> ConvertService {
        ConvertService {
            download_service: Arc::new(NoDownload),
            file_storage: storage,
            settings: ConvertSettings::default(),
        }
    }

    #[tokio::test]
    async fn inline_png_is_stored_as_jpeg() {
        let storage = Arc::new(RecordingStorage::default());
        let request = ConversionRequest {
            image_url: None,
            image_base64: Some(jpeg::tests::png_base64(4, 3)),
        };
        let result = service(storage.clone()).convert_to_jpg(request).await.unwrap();

        assert_eq!(result.image_url, format!("https://bucket.s3.region.amazonaws.com/{}", result.key));
        let stored = storage.stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].0, result.key);
        assert_eq!(stored[0].1, "image/jpeg");
    }

    #[tokio::test]
    async fn fetch_failures_skip_upload() {
        let storage = Arc::new(RecordingStorage::default());
        let request = ConversionRequest {
            image_url: Some("http://127.0.0.1:1/cat.png".to_string()),
            image_base64: None,
        };
        let err = service(storage.clone()).convert_to_jpg(request).await.unwrap_err();

        assert!(matches!(err, ConvertError::Fetch(_)));
        assert!(storage.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn undecodable_bytes_are_codec_errors() {
        let storage = Arc::new(RecordingStorage::default());
        let request = ConversionRequest {
            image_url: None,
            image_base64: Some("aGVsbG8gd29ybGQ=".to_string()),
        };
        let err = service(storage.clone()).convert_to_jpg(request).await.unwrap_err();

        assert!(matches!(err, ConvertError::Codec(_)));
        assert!(storage.stored.lock().unwrap().is_empty());
    }
}

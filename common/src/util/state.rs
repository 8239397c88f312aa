use std::{sync::Arc, time::Duration};

use crate::{
    download::{DownloadService, IDownloadService},
    persistence::{s3::S3FileStorage, IFileStorage},
};

pub struct S3BaseSettings {
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    pub upload_timeout: Duration,
}

pub struct DownloadSettings {
    pub fetch_timeout: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct ConvertSettings {
    pub jpeg_quality: u8,
    pub random_key_suffix: bool,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        ConvertSettings {
            jpeg_quality: 75,
            random_key_suffix: false,
        }
    }
}

pub struct StorageBaseServiceCollection {
    pub download_service: Arc<dyn IDownloadService>,
    pub file_storage: Arc<dyn IFileStorage>,
}

impl StorageBaseServiceCollection {
    pub fn build(download_settings: &DownloadSettings, s3_settings: S3BaseSettings) -> Result<Arc<Self>, &'static str> {
        Ok(Arc::new(StorageBaseServiceCollection {
            download_service: Arc::new(DownloadService::build(download_settings.fetch_timeout)?),
            file_storage: Arc::new(S3FileStorage::build(
                s3_settings.endpoint,
                s3_settings.region,
                s3_settings.access_key_id,
                s3_settings.secret_access_key,
                s3_settings.bucket,
                s3_settings.upload_timeout,
            )?),
        }))
    }
}

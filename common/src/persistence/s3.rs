use std::time::Duration;

use s3::{creds::Credentials, region::Region, Bucket};
use tracing::info;

use crate::error::ConvertError;

use super::IFileStorage;

pub struct S3FileStorage {
    bucket: Bucket,
    public_base: PublicUrlBase,
    upload_timeout: Duration,
}

/// How public object URLs are built. AWS buckets use the virtual-hosted style,
/// custom endpoints (MinIO and friends) are addressed path style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicUrlBase {
    VirtualHosted { bucket: String, region: String },
    PathStyle { endpoint: String, bucket: String },
}

impl PublicUrlBase {
    pub fn object_url(&self, key: &str) -> String {
        match self {
            PublicUrlBase::VirtualHosted { bucket, region } => format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key),
            PublicUrlBase::PathStyle { endpoint, bucket } => format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key),
        }
    }
}

impl S3FileStorage {
    pub fn build(endpoint: Option<String>, region: String, access_key_id: String, secret_access_key: String, bucket: String, upload_timeout: Duration) -> Result<Self, &'static str> {
        let credentials = Credentials::new(Some(&access_key_id), Some(&secret_access_key), None, None, None);
        let credentials = credentials.map_err(|_| "error with credentials")?;
        let (s3_region, public_base) = match endpoint {
            Some(endpoint) => (
                Region::Custom { region: region.clone(), endpoint: endpoint.clone() },
                PublicUrlBase::PathStyle { endpoint, bucket: bucket.clone() },
            ),
            None => (
                aws_region(&region)?,
                PublicUrlBase::VirtualHosted { bucket: bucket.clone(), region },
            ),
        };
        let s3_bucket = Bucket::new(&bucket, s3_region, credentials).map_err(|_| "error with bucket")?;
        let s3_bucket = match public_base {
            PublicUrlBase::PathStyle { .. } => s3_bucket.with_path_style(),
            PublicUrlBase::VirtualHosted { .. } => s3_bucket,
        };
        Ok(S3FileStorage {
            bucket: s3_bucket,
            public_base,
            upload_timeout,
        })
    }
}

/// Regions rust-s3 does not know parse to a custom region whose endpoint is the bare name.
/// Those still live on AWS, so point them at the regional S3 host.
fn aws_region(region: &str) -> Result<Region, &'static str> {
    match region.parse::<Region>().map_err(|_| "error with region")? {
        Region::Custom { region, endpoint } if endpoint == region => Ok(Region::Custom {
            endpoint: format!("s3.{}.amazonaws.com", region),
            region,
        }),
        known => Ok(known),
    }
}

#[async_trait::async_trait]
impl IFileStorage for S3FileStorage {
    async fn store_result_file(&self, key: &str, mime_type: &str, source: Vec<u8>) -> Result<String, ConvertError> {
        info!("Storing {} ({} KiB)", key, source.len() / 1024);
        let put = self.bucket.put_object_with_content_type(key, &source, mime_type);
        let response = tokio::time::timeout(self.upload_timeout, put)
            .await
            .map_err(|_| ConvertError::Storage(format!("Upload of {} timed out after {}s", key, self.upload_timeout.as_secs())))?
            .map_err(|e| ConvertError::Storage(e.to_string()))?;
        let status = response.status_code();
        if !(200..300).contains(&status) {
            let body = String::from_utf8_lossy(response.as_slice());
            return Err(ConvertError::Storage(format!("Upload of {} failed with status {}: {}", key, status, body)));
        }
        Ok(self.public_base.object_url(key))
    }
}

use std::sync::Arc;

use common::{
    convert::ConvertService,
    download::IDownloadService,
    persistence::IFileStorage,
    util::state::{ConvertSettings, DownloadSettings, S3BaseSettings, StorageBaseServiceCollection},
};

pub type Services = Arc<ServiceCollection>;

pub struct ServiceCollection {
    pub convert_service: ConvertService,
}

impl ServiceCollection {
    pub fn build(download_settings: DownloadSettings, s3_settings: S3BaseSettings, convert_settings: ConvertSettings) -> Result<Arc<Self>, &'static str> {
        let base = StorageBaseServiceCollection::build(&download_settings, s3_settings)?;
        Ok(Self::from_parts(base.download_service.clone(), base.file_storage.clone(), convert_settings))
    }

    pub fn from_parts(download_service: Arc<dyn IDownloadService>, file_storage: Arc<dyn IFileStorage>, settings: ConvertSettings) -> Arc<Self> {
        Arc::new(ServiceCollection {
            convert_service: ConvertService {
                download_service,
                file_storage,
                settings,
            },
        })
    }
}

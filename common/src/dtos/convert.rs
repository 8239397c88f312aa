use serde::{Deserialize, Serialize};

use crate::{error::ConvertError, models::StoredImageResult};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConvertResultDto {
    pub image_url: String,
}

impl From<StoredImageResult> for ConvertResultDto {
    fn from(result: StoredImageResult) -> Self {
        ConvertResultDto { image_url: result.image_url }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorDto {
    pub error: String,
}

impl From<&ConvertError> for ErrorDto {
    fn from(err: &ConvertError) -> Self {
        ErrorDto { error: err.to_string() }
    }
}

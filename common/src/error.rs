use reqwest::StatusCode;

/// Every way a conversion can fail, classified by who is at fault.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{0}")]
    Input(String),
    #[error("Failed to retrieve image, status code: {0}")]
    UpstreamStatus(u16),
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    Codec(String),
    #[error("{0}")]
    Storage(String),
}

impl ConvertError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConvertError::Input(_) | ConvertError::UpstreamStatus(_) => StatusCode::BAD_REQUEST,
            ConvertError::Fetch(_) | ConvertError::Codec(_) | ConvertError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        ConvertError::Codec(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_bad_requests() {
        assert_eq!(ConvertError::Input("No image data provided".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ConvertError::UpstreamStatus(404).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn processing_errors_are_server_errors() {
        assert_eq!(ConvertError::Fetch("connection refused".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ConvertError::Codec("bad image".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!ConvertError::Storage("could not put blob".into()).is_client_error());
    }

    #[test]
    fn upstream_status_message_carries_code() {
        assert_eq!(ConvertError::UpstreamStatus(503).to_string(), "Failed to retrieve image, status code: 503");
    }
}

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Body of `POST /convert_to_jpg`. Both fields are optional on the wire,
/// [`ConversionRequest::into_source`] decides which one is used.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ConversionRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(Url),
    Inline(String),
}

impl ConversionRequest {
    /// Empty strings count as absent. The URL is checked first and wins when both are set.
    pub fn into_source(self) -> Result<ImageSource, ConvertError> {
        let image_url = self.image_url.filter(|url| !url.is_empty());
        let image_base64 = self.image_base64.filter(|data| !data.is_empty());

        match (image_url, image_base64) {
            (Some(image_url), _) => parse_source_url(&image_url).map(ImageSource::Url),
            (None, Some(image_base64)) => Ok(ImageSource::Inline(image_base64)),
            (None, None) => Err(ConvertError::Input("No image data provided".to_string())),
        }
    }
}

fn parse_source_url(image_url: &str) -> Result<Url, ConvertError> {
    let url = Url::parse(image_url).map_err(|e| ConvertError::Input(format!("Invalid image URL: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConvertError::Input(format!("Invalid image URL: unsupported scheme '{}'", scheme))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImageResult {
    pub image_url: String,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(image_url: Option<&str>, image_base64: Option<&str>) -> ConversionRequest {
        ConversionRequest {
            image_url: image_url.map(str::to_string),
            image_base64: image_base64.map(str::to_string),
        }
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = request(None, None).into_source().unwrap_err();
        assert!(matches!(err, ConvertError::Input(_)));
        assert_eq!(err.to_string(), "No image data provided");
    }

    #[test]
    fn empty_fields_count_as_missing() {
        assert!(request(Some(""), Some("")).into_source().is_err());
        assert_eq!(request(Some(""), Some("aGk=")).into_source().unwrap(), ImageSource::Inline("aGk=".to_string()));
    }

    #[test]
    fn url_wins_over_inline_data() {
        let source = request(Some("https://example.com/cat.png"), Some("aGk=")).into_source().unwrap();
        assert_eq!(source, ImageSource::Url(Url::parse("https://example.com/cat.png").unwrap()));
    }

    #[test]
    fn non_http_urls_are_rejected() {
        let err = request(Some("ftp://example.com/cat.png"), None).into_source().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
        assert!(matches!(request(Some("not a url"), None).into_source(), Err(ConvertError::Input(_))));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: ConversionRequest = serde_json::from_str(r#"{"image_base64": "aGk=", "format": "png"}"#).unwrap();
        assert_eq!(request.image_url, None);
        assert_eq!(request.image_base64.as_deref(), Some("aGk="));
    }
}

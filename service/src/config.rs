use std::{env, str::FromStr, time::Duration};

use common::util::state::{ConvertSettings, DownloadSettings, S3BaseSettings};

pub fn get_port() -> u16 {
    parse_or(env::var("PORT").ok(), 7010)
}

pub fn get_request_timeout() -> Duration {
    Duration::from_secs(parse_or(env::var("REQUEST_TIMEOUT_SECONDS").ok(), 90))
}

pub fn get_max_body_bytes() -> usize {
    parse_or(env::var("MAX_BODY_BYTES").ok(), 25 * 1024 * 1024)
}

pub fn get_download_settings() -> DownloadSettings {
    DownloadSettings {
        fetch_timeout: Duration::from_secs(parse_or(env::var("FETCH_TIMEOUT_SECONDS").ok(), 30)),
    }
}

pub fn get_convert_settings() -> ConvertSettings {
    let defaults = ConvertSettings::default();
    ConvertSettings {
        jpeg_quality: parse_or::<u8>(env::var("JPEG_QUALITY").ok(), defaults.jpeg_quality).clamp(1, 100),
        random_key_suffix: parse_or(env::var("OBJECT_KEY_RANDOM_SUFFIX").ok(), defaults.random_key_suffix),
    }
}

/// Storage settings are passed through untouched, missing values only fail once an upload is attempted.
pub fn get_s3_settings() -> S3BaseSettings {
    S3BaseSettings {
        endpoint: env::var("S3_ENDPOINT").ok().filter(|endpoint| !endpoint.is_empty()),
        region: env::var("AWS_REGION").unwrap_or_default(),
        access_key_id: env::var("AWS_ACCESS_KEY").unwrap_or_default(),
        secret_access_key: env::var("AWS_SECRET_KEY").unwrap_or_default(),
        bucket: env::var("S3_BUCKET_NAME").unwrap_or_default(),
        upload_timeout: Duration::from_secs(parse_or(env::var("UPLOAD_TIMEOUT_SECONDS").ok(), 30)),
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    match value.map(|value| value.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        _ => default,
    }
}

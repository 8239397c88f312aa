use chrono::Utc;

use super::random::generate_alphanumeric;

const KEY_PREFIX: &str = "converted_image_";
const KEY_EXTENSION: &str = "jpg";
const SUFFIX_LEN: usize = 10;

/// Object key for a converted image. Second resolution only, so two uploads in
/// the same second collide unless `random_suffix` is set.
pub fn object_key(random_suffix: bool) -> String {
    let suffix = random_suffix.then(|| generate_alphanumeric(SUFFIX_LEN));
    object_key_at(Utc::now().timestamp(), suffix.as_deref())
}

pub fn object_key_at(timestamp: i64, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{}{}_{}.{}", KEY_PREFIX, timestamp, suffix, KEY_EXTENSION),
        None => format!("{}{}.{}", KEY_PREFIX, timestamp, KEY_EXTENSION),
    }
}

pub static VERSION: &str = env!("CARGO_PKG_VERSION");
pub static NAME: &str = "jpg-convert";

pub static CONVERT_ROUTE: &str = "/convert_to_jpg";

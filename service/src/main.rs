use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use jpg_convert::config::{get_convert_settings, get_download_settings, get_max_body_bytes, get_port, get_request_timeout, get_s3_settings};
use jpg_convert::routes::create_app;
use jpg_convert::state::ServiceCollection;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Could not init tracing.");

    let services = ServiceCollection::build(get_download_settings(), get_s3_settings(), get_convert_settings()).expect("Could not init services.");
    let app = create_app(services, get_max_body_bytes(), get_request_timeout());

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), get_port());
    info!("listening on {}", &addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server failed.");
}

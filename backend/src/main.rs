use backend::config::CONFIG;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Starting election service on {}:{}", CONFIG.address, CONFIG.port);

    if let Err(e) = backend::rocket().launch().await {
        error!("Election service stopped: {}", e);
        std::process::exit(1);
    }
}

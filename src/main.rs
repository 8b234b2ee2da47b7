use clap::Parser; // for cli
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prompt_image_gateway::build_router;
use prompt_image_gateway::cache::ImageCache;
use prompt_image_gateway::client::ImageClient;
use prompt_image_gateway::config::Args;
use prompt_image_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments
    let args = Args::parse();

    if args.api_key.is_none() {
        warn!("NANOGPT_API_KEY is not set, image requests will be rejected upstream");
    }

    let ttl = chrono::Duration::from_std(std::time::Duration::from_secs(args.cache_ttl))?;

    let client = ImageClient::new(reqwest::Client::new(), &args.api_base, args.api_key.clone())
        .with_model(&args.model)
        .with_size(&args.size);
    info!(endpoint = client.endpoint(), model = %args.model, size = %args.size, "image client ready");

    // creating shared state
    let state = Arc::new(AppState::new(ImageCache::new(Arc::new(client), ttl)));

    let app = build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, cache_ttl_secs = args.cache_ttl, "image gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}

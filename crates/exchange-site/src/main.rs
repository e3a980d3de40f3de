use clap::Parser;
use exchange_site::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("exchange_site=info,exchange_router=info,tower_http=info")),
        )
        .init();

    cli::run(Cli::parse()).await
}

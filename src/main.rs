use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_gateway::{api, config::Config, store::RecordStore, upstream::WeatherClient};

#[derive(Parser)]
#[command(name = "weather-gateway")]
#[command(about = "HTTP gateway for fetching and storing current weather by location")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "weather_gateway=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16) -> anyhow::Result<()> {
    let config = Config::from_env();

    let origin = config
        .allowed_origin
        .parse()
        .with_context(|| format!("Invalid allowed origin: {}", config.allowed_origin))?;

    let state = api::AppState {
        store: RecordStore::new(),
        client: WeatherClient::new(config.upstream_url.as_str(), config.api_key.as_str()),
    };
    let app = api::create_router(state, origin);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Weather gateway listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port }) => serve(port).await,
        // Default: start server on the standard port
        None => serve(8000).await,
    }
}

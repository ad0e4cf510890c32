use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_relay::config::Config;
use chat_relay::llm::ProviderRegistry;
use chat_relay::server::{AppState, build_app};
use chat_relay::transcript::Transcript;

#[derive(Parser)]
#[command(name = "chat-relay")]
#[command(about = "Relay chat messages to third-party LLM APIs")]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "relay.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_relay=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load(&args.config).await?;

    let state = AppState {
        providers: ProviderRegistry::from_env(),
        transcript: Transcript::new(),
    };
    let app = build_app(
        state,
        config.server.request_timeout_seconds,
        &config.static_dir,
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("chat relay listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

//! Semsim HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use semsim::config::{Config, ResolverStrategy};
use semsim::embedding::{EmbeddingResolver, MiniLmConfig, MiniLmEmbedder, RemoteEmbedder};
use semsim::gateway::{HandlerState, create_router_with_state};
use semsim::pipeline::SimilarityPipeline;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        strategy = ?config.strategy,
        "Semsim starting"
    );

    let resolver: Arc<dyn EmbeddingResolver> = match config.strategy {
        ResolverStrategy::Local => {
            let minilm_config = if let Some(path) = &config.model_path {
                MiniLmConfig::new(path.clone())
            } else {
                tracing::warn!("No SEMSIM_MODEL_PATH configured, running embedder in stub mode");
                MiniLmConfig::stub()
            };
            Arc::new(MiniLmEmbedder::load(minilm_config)?)
        }
        ResolverStrategy::Remote => {
            let remote_config = config.remote_config()?;
            tracing::info!(
                provider_url = %remote_config.provider_url,
                timeout_secs = remote_config.timeout.as_secs(),
                "Using remote embedding provider"
            );
            Arc::new(RemoteEmbedder::new(remote_config)?)
        }
    };

    let pipeline = Arc::new(SimilarityPipeline::new(resolver));
    let app = create_router_with_state(HandlerState::new(pipeline));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Semsim shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("SEMSIM_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vidyabot_error::{ServerError, ServerErrorKind, VidyabotResult};
use vidyabot_gemini::GeminiClient;
use vidyabot_server::{AppState, ServerConfig, router};

#[derive(Parser, Debug)]
#[command(author, version, about = "VidyaBot chat proxy server", long_about = None)]
struct Args {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the bundled SPA shell
    #[arg(short, long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> VidyabotResult<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vidyabot_server=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    // Startup validation: refuse to start without a credential.
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    info!(
        port = config.port,
        environment = %config.environment,
        model = %config.model,
        static_dir = %config.static_dir.display(),
        "Starting VidyaBot proxy"
    );

    let model = GeminiClient::new(&config.api_key, &config.model);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(Arc::new(model), Arc::new(config));

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: addr.to_string(),
            message: e.to_string(),
        })
    })?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    Ok(())
}

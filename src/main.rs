use std::env;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talentscout::{handlers::build_router, AppState, Config};

const DEFAULT_FILTER: &str = "talentscout=debug,tower_http=debug,axum::rejection=trace";
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;

    tracing::info!("Starting TalentScout resume analysis UI");
    tracing::info!("Analysis backend: {}", config.backend_url);
    tracing::info!("Max upload size: {}MB", config.max_file_size_mb);

    // PORT takes precedence for platform deployments
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.server_port);
    let addr = format!("{}:{}", config.server_host, port);

    let session_ttl = config.session_ttl();
    let state = AppState::from_config(config);
    state
        .sessions
        .spawn_sweeper(session_ttl, SESSION_SWEEP_INTERVAL.min(session_ttl));
    tracing::info!("Idle sessions expire after {:?}", session_ttl);

    let app = build_router(state);

    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if env::var("LOG_FORMAT").map(|f| f == "json").unwrap_or(false) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}

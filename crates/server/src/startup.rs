use std::{future::Future, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_with_format;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::company::StatusChoices;

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from the resolved config
fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect, migrate if enabled, and wire the company service.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        models::db::migrate(&db).await?;
    }
    let choices = StatusChoices::from_config(&cfg.companies)?;
    info!(
        event = "status_choices",
        default = %choices.default_status(),
        allowed = choices.allowed().len(),
        "company status choices loaded"
    );
    Ok(ServerState::from_db(db, choices))
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    run_with_shutdown(async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Same as [`run`], stopping gracefully once `shutdown` resolves.
pub async fn run_with_shutdown<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    let cfg = AppConfig::load_or_env()?;
    init_logging_with_format(&cfg.server.log_format);
    common::metrics::init();

    let state = build_state(&cfg).await?;

    // Build router
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr = load_bind_addr(&cfg)?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(event = "shutdown_complete", "server stopped accepting connections");
    Ok(())
}

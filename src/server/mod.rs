/// HTTP surface: page, layout and the two chart endpoints.
///
/// ```text
///  browser control change
///        │  GET /api/success-pie?site=..
///        │  GET /api/payload-scatter?site=..&low=..&high=..
///        ▼
///   ┌──────────┐
///   │  routes   │  query → ControlState → views::* → ChartSpec (JSON)
///   └──────────┘
/// ```

pub mod page;
pub mod routes;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::config::DashboardConfig;
use crate::state::AppState;

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &DashboardConfig, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    log::info!("Dashboard available at http://{}", config.bind_addr);

    axum::serve(listener, routes::create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    log::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

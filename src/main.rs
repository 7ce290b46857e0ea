use anyhow::Result;
use launch_dash::config::DashboardConfig;
use launch_dash::data::loader;
use launch_dash::server;
use launch_dash::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();
    let table = loader::load_file(&config.dataset_path)?;

    server::serve(&config, AppState::new(table)).await
}

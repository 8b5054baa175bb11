//! `salary-engine` server binary.
//!
//! Environment:
//! - `SALARY_ENGINE_CONFIG`: regime configuration directory (default `./config/default`)
//! - `SALARY_ENGINE_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;
use std::path::Path;

use salary_engine::api::{create_router, AppState};
use salary_engine::config::{ConfigLoader, TaxRegime};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn load_regime(dir: &str) -> Result<TaxRegime, salary_engine::error::EngineError> {
    if !Path::new(dir).exists() {
        warn!(config_dir = %dir, "Configuration directory not found, using built-in regime");
        return Ok(TaxRegime::default());
    }
    Ok(ConfigLoader::load(dir)?.into_regime())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_dir =
        env::var("SALARY_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("SALARY_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let regime = load_regime(&config_dir)?;
    info!(
        regime = %regime.metadata().code,
        brackets = regime.brackets().len(),
        "Tax regime loaded"
    );

    let router = create_router(AppState::new(regime));
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Salary engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}

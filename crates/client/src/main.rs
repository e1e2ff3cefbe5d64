//! PandaLearn client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (session worker) via `Runtime::builder()`
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)

use std::path::PathBuf;

use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Game config path: `PANDA_CONFIG`, else `config.toml` in the platform config dir.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("PANDA_CONFIG") {
        return Some(PathBuf::from(path));
    }

    directories::ProjectDirs::from("", "", "pandalearn")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use game_content::ConfigLoader;
    use pandalearn_client::Client;
    use runtime::{Runtime, RuntimeConfig};

    // 1. Setup logging
    logging::setup_logging()?;

    // 2. Load configuration from environment and the optional config file
    let game_config = match config_path() {
        Some(path) => {
            tracing::info!("Game config: {}", path.display());
            ConfigLoader::load_or_default(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => Default::default(),
    };
    let runtime_config = RuntimeConfig::from_env().with_game_config(game_config);
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    tracing::info!("Starting PandaLearn client");
    tracing::info!("Pointer: {:?}", runtime_config.game_config.wheel.pointer);
    tracing::info!("Miss policy: {:?}", runtime_config.game_config.battle.miss_policy);

    // 3. Build Runtime (independent layer)
    tracing::debug!("Building runtime...");
    let runtime = Runtime::builder().config(runtime_config).build().await?;

    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

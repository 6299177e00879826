//! `mnt init`: create `.mentora/` with a roster database and a default
//! `config.toml`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use mentora_db::MentoraDb;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::{CONFIG_FILE, DB_FILE, PROJECT_DIR};
use crate::output::output;

const DEFAULT_CONFIG: &str = r#"[assignment]
# equal, semester, balanced, or manual
default_strategy = "balanced"
# Fix the semester strategy's RNG seed to make runs reproducible.
# semester_seed = 42
notify_roles = ["admin"]

[general]
default_limit = 20
"#;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: PathBuf,
    database: PathBuf,
    config: PathBuf,
    config_written: bool,
}

/// Handle `mnt init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project_root = match &flags.project {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let response = init_project(&project_root, args.force).await?;
    output(&response, flags.format)
}

async fn init_project(project_root: &Path, force: bool) -> anyhow::Result<InitResponse> {
    let state_dir = project_root.join(PROJECT_DIR);
    std::fs::create_dir_all(&state_dir)
        .with_context(|| format!("failed to create {}", state_dir.display()))?;

    let database = state_dir.join(DB_FILE);
    MentoraDb::open_local(&database.to_string_lossy())
        .await
        .with_context(|| format!("failed to initialize {}", database.display()))?;

    let config = state_dir.join(CONFIG_FILE);
    let config_written = force || !config.exists();
    if config_written {
        std::fs::write(&config, DEFAULT_CONFIG)
            .with_context(|| format!("failed to write {}", config.display()))?;
    }

    tracing::info!(root = %project_root.display(), "initialized mentora project");
    Ok(InitResponse {
        project_root: project_root.to_path_buf(),
        database,
        config,
        config_written,
    })
}

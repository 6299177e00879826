use std::path::Path;

use anyhow::Context;
use mentora_config::MentoraConfig;

/// Load `.env` from the project root (falling back to the current
/// directory), then the layered configuration for that project.
pub fn load_config(project_root: &Path) -> anyhow::Result<MentoraConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    } else {
        dotenvy::dotenv().ok();
    }

    MentoraConfig::load_for_project(project_root).context("failed to load mentora configuration")
}

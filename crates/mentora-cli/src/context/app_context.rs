use std::path::Path;

use anyhow::Context;
use mentora_config::MentoraConfig;
use mentora_db::service::MentoraService;
use mentora_engine::AssignmentEngine;

use super::{DB_FILE, PROJECT_DIR};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    /// Engine over the project's roster database. Repo calls go through
    /// [`Self::service`].
    pub engine: AssignmentEngine<MentoraService>,
    pub config: MentoraConfig,
}

impl AppContext {
    pub async fn init(project_root: &Path, config: MentoraConfig) -> anyhow::Result<Self> {
        let db_path = project_root.join(PROJECT_DIR).join(DB_FILE);
        let service = MentoraService::new_local(&db_path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open roster database {}", db_path.display()))?;

        let engine = AssignmentEngine::new(service, config.assignment.clone());
        Ok(Self { engine, config })
    }

    #[must_use]
    pub const fn service(&self) -> &MentoraService {
        self.engine.store()
    }
}

mod app_context;
mod project_root;

pub use app_context::AppContext;
pub use project_root::{CONFIG_FILE, DB_FILE, PROJECT_DIR, find_project_root};

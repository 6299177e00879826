use std::path::{Path, PathBuf};

/// Per-project state directory.
pub const PROJECT_DIR: &str = ".mentora";
/// Roster database inside [`PROJECT_DIR`].
pub const DB_FILE: &str = "mentora.db";
/// Project-level configuration inside [`PROJECT_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Walk upwards from `start` until a `.mentora` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

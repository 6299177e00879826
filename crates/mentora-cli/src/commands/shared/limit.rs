/// Resolve a listing limit: subcommand flag, then global `--limit`, then the
/// configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> u32 {
    local.or(global).unwrap_or(configured)
}

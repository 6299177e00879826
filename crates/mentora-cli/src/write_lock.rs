//! Cross-process roster write lock.
//!
//! At most one `mnt` process mutates a project's roster at a time. The lock
//! is a pid file created with `create_new`; a file left by a dead process is
//! reclaimed.

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::context::PROJECT_DIR;

const LOCK_FILE: &str = "roster.write.lock";
const LOCK_WAIT_TIMEOUT: Duration = Duration::from_secs(60);
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(200);

/// Removes the lock file on drop.
pub struct RosterLockGuard {
    path: PathBuf,
}

impl Drop for RosterLockGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[derive(Debug)]
enum Contention {
    HeldBy(u32),
    Stale,
    Unreadable,
}

pub async fn acquire_for_project(project_root: &Path) -> anyhow::Result<RosterLockGuard> {
    let lock_path = project_root.join(PROJECT_DIR).join(LOCK_FILE);
    let started = Instant::now();

    loop {
        let contention = match try_acquire(&lock_path) {
            Ok(guard) => return Ok(guard),
            Err(contention) => contention,
        };

        match contention {
            Contention::Stale => {
                tracing::warn!(path = %lock_path.display(), "removing stale roster lock");
                let _ = std::fs::remove_file(&lock_path);
                continue;
            }
            Contention::HeldBy(pid) if started.elapsed() >= LOCK_WAIT_TIMEOUT => {
                anyhow::bail!(
                    "another roster write is running (pid {pid}); try again after it finishes"
                );
            }
            Contention::Unreadable if started.elapsed() >= LOCK_WAIT_TIMEOUT => {
                anyhow::bail!(
                    "could not acquire roster lock at {}; remove it if no mnt process is running",
                    lock_path.display()
                );
            }
            Contention::HeldBy(pid) => {
                tracing::debug!(pid, "waiting for roster lock");
            }
            Contention::Unreadable => {}
        }
        tokio::time::sleep(LOCK_RETRY_DELAY).await;
    }
}

fn try_acquire(lock_path: &Path) -> Result<RosterLockGuard, Contention> {
    if let Some(parent) = lock_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(lock_path)
    {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(RosterLockGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            let mut contents = String::new();
            OpenOptions::new()
                .read(true)
                .open(lock_path)
                .and_then(|mut file| file.read_to_string(&mut contents))
                .map_err(|_| Contention::Unreadable)?;

            match contents.trim().parse::<u32>() {
                Ok(pid) if is_process_running(pid) => Err(Contention::HeldBy(pid)),
                Ok(_) => Err(Contention::Stale),
                Err(_) => Err(Contention::Unreadable),
            }
        }
        Err(_) => Err(Contention::Unreadable),
    }
}

fn is_process_running(pid: u32) -> bool {
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .status()
        .is_ok_and(|status| status.success())
}

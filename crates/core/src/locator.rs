use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Name prefix of the directories the controller writes, one per run.
pub const RUN_PREFIX: &str = "trajectory_";

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("no `trajectory_*` directory found under {}", root.display())]
    NoRunFound { root: PathBuf },
    #[error("failed to list {}: {source}", root.display())]
    Io {
        root: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The default log root, `$HOME/.ros/log`.
pub fn default_log_root() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").filter(|h| !h.is_empty())?;
    Some(PathBuf::from(home).join(".ros").join("log"))
}

/// Pick the run directory to display.
///
/// An explicit directory is returned as-is; whether it exists is discovered
/// when its files are read. Otherwise the newest run under `root` is chosen,
/// where "newest" means the lexicographically greatest `trajectory_*` name.
/// Run ids are expected to be fixed-width: `trajectory_9` sorts after
/// `trajectory_10`.
pub fn locate(explicit_dir: Option<&Path>, root: &Path) -> Result<PathBuf, LocateError> {
    if let Some(dir) = explicit_dir {
        return Ok(dir.to_path_buf());
    }

    let latest = find_latest_run(root)?.ok_or_else(|| LocateError::NoRunFound {
        root: root.to_path_buf(),
    })?;
    debug!(root = %root.display(), run = %latest, "located latest run");
    Ok(root.join(latest))
}

/// Name of the lexicographically greatest run directory directly under
/// `root`, or `None` if there is none (including when `root` is missing).
pub fn find_latest_run(root: &Path) -> Result<Option<String>, LocateError> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(root = %root.display(), "log root does not exist");
            return Ok(None);
        }
        Err(source) => {
            return Err(LocateError::Io {
                root: root.to_path_buf(),
                source,
            });
        }
    };

    let mut latest: Option<String> = None;
    for entry in entries {
        let entry = entry.map_err(|source| LocateError::Io {
            root: root.to_path_buf(),
            source,
        })?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.starts_with(RUN_PREFIX) || !entry.path().is_dir() {
            continue;
        }
        if latest.as_ref().is_none_or(|best| name > *best) {
            latest = Some(name);
        }
    }
    Ok(latest)
}

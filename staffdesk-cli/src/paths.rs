//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "staffdesk";
const APPLICATION: &str = "staffdesk";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Path to the optional settings file.
///
/// - Linux: `$XDG_CONFIG_HOME/staffdesk/config.toml`
/// - macOS: `~/Library/Application Support/dev.staffdesk.staffdesk/config.toml`
/// - Windows: `C:\Users\<User>\AppData\Roaming\staffdesk\staffdesk\config\config.toml`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Directory holding `latest.log` and its archived predecessors.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file for this run.
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join(LATEST_LOG)
}

/// Archives the previous run's log under a timestamped name and prunes the
/// oldest archives beyond [`MAX_OLD_LOGS`].
///
/// Call before creating the new log file. Failures are ignored: losing an
/// old log must not stop the command.
pub fn rotate_logs(dir: &Path) {
    let latest = log_file(dir);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{timestamp}.log")));
    }
    prune_archived_logs(dir, MAX_OLD_LOGS);
}

fn prune_archived_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first.
    archived.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());

    let excess = archived.len().saturating_sub(keep);
    for entry in archived.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}

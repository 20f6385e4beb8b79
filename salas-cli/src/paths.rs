//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "uy.edu";
const ORGANIZATION: &str = "ucu";
const APPLICATION: &str = "salas";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Data directory for the persisted session.
///
/// - Linux: `$XDG_DATA_HOME/salas` or `~/.local/share/salas`
/// - macOS: `~/Library/Application Support/uy.edu.ucu.salas`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ucu\salas\data`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Cache directory, home of the log files.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default path of the session database.
pub fn session_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("session.db"))
}

/// Path of the current log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Moves `latest.log` in `dir` aside as `salas-<timestamp>.log` and keeps
/// only the newest [`MAX_OLD_LOGS`] archives.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs(dir: &Path) {
    let latest = dir.join("latest.log");
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f");
        let _ = fs::rename(&latest, dir.join(format!("salas-{}.log", stamp)));
    }

    for stale in stale_archives(dir) {
        let _ = fs::remove_file(stale);
    }
}

/// Archives beyond the retention limit, oldest first.
///
/// Archive names embed a sortable timestamp, so name order is age order.
fn stale_archives(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut archives: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("salas-") && n.ends_with(".log"))
        })
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(MAX_OLD_LOGS);
    archives.truncate(excess);
    archives
}

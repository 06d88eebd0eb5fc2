use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, SecondsFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopLogCategory {
    Startup,
    Probe,
    Menu,
    Navigation,
}

impl DesktopLogCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            DesktopLogCategory::Startup => "startup",
            DesktopLogCategory::Probe => "probe",
            DesktopLogCategory::Menu => "menu",
            DesktopLogCategory::Navigation => "navigation",
        }
    }
}

pub fn resolve_desktop_log_path(root_dir: Option<PathBuf>, log_file: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(log_file),
        None => std::env::temp_dir().join("help-browser").join(log_file),
    }
}

pub fn format_log_line(
    category: DesktopLogCategory,
    message: &str,
    timestamp: DateTime<Local>,
) -> String {
    format!(
        "{} [{}] {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
        category.as_str(),
        message
    )
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(format!(".{index}"));
    PathBuf::from(raw)
}

fn rotate_log_files(path: &Path, backup_count: usize) -> io::Result<()> {
    if backup_count == 0 {
        return fs::remove_file(path);
    }

    let oldest = backup_path(path, backup_count);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for index in (1..backup_count).rev() {
        let from = backup_path(path, index);
        if from.exists() {
            fs::rename(&from, backup_path(path, index + 1))?;
        }
    }
    fs::rename(path, backup_path(path, 1))
}

pub fn append_log_line(
    path: &Path,
    line: &str,
    max_bytes: u64,
    backup_count: usize,
) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::metadata(path) {
        Ok(metadata) if metadata.len() >= max_bytes => rotate_log_files(path, backup_count)?,
        Ok(_) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => return Err(error),
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

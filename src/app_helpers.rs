use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use chrono::Local;

use crate::{
    logging::{self, DesktopLogCategory},
    DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES, LOG_BACKUP_COUNT,
};

static DESKTOP_LOG_WRITE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub fn append_startup_log(message: &str) {
    append_desktop_log_with_category(DesktopLogCategory::Startup, message);
}

pub fn append_probe_log(message: &str) {
    append_desktop_log_with_category(DesktopLogCategory::Probe, message);
}

pub fn append_menu_log(message: &str) {
    append_desktop_log_with_category(DesktopLogCategory::Menu, message);
}

pub fn append_navigation_log(message: &str) {
    append_desktop_log_with_category(DesktopLogCategory::Navigation, message);
}

pub fn desktop_log_path() -> PathBuf {
    logging::resolve_desktop_log_path(desktop_log_root(), DESKTOP_LOG_FILE)
}

#[cfg(not(test))]
fn desktop_log_root() -> Option<PathBuf> {
    crate::runtime_paths::default_root_dir()
}

// Tests never touch the user's log.
#[cfg(test)]
fn desktop_log_root() -> Option<PathBuf> {
    Some(std::env::temp_dir().join("help-browser-tests"))
}

fn append_desktop_log_with_category(category: DesktopLogCategory, message: &str) {
    let line = logging::format_log_line(category, message, Local::now());
    if cfg!(debug_assertions) {
        eprintln!("{line}");
    }

    let _guard = DESKTOP_LOG_WRITE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .ok();
    let _ = logging::append_log_line(
        &desktop_log_path(),
        &line,
        DESKTOP_LOG_MAX_BYTES,
        LOG_BACKUP_COUNT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_log_path_stays_out_of_home_directory_in_tests() {
        let path = desktop_log_path();

        assert!(path.starts_with(std::env::temp_dir()));
        if let Some(home) = home::home_dir() {
            assert!(!path.starts_with(home.join(".help-browser")));
        }
    }

    #[test]
    fn append_startup_log_writes_category_line() {
        append_startup_log("startup line 93c1");

        let log = std::fs::read_to_string(desktop_log_path()).expect("read desktop log");
        assert!(log.contains("[startup] startup line 93c1"));
    }
}

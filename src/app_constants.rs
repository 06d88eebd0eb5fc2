pub const DEFAULT_ONLINE_HELP_URL: &str = "https://help.example.com/docs";
pub const ONLINE_HELP_URL_ENV: &str = "HELP_BROWSER_ONLINE_URL";
pub const OFFLINE_HELP_URL_ENV: &str = "HELP_BROWSER_OFFLINE_URL";
pub const OFFLINE_HELP_RESOURCE: &str = "help/offline.html";
pub const PROBE_TIMEOUT_ENV: &str = "HELP_BROWSER_PROBE_TIMEOUT_MS";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 30_000;
pub const PROBE_TIMEOUT_MIN_MS: u64 = 100;
pub const PROBE_TIMEOUT_MAX_MS: u64 = 120_000;
pub const HELP_ROOT_ENV: &str = "HELP_BROWSER_ROOT";
pub const HELP_WINDOW_LABEL: &str = "help";
pub const DEFAULT_WINDOW_TITLE: &str = "Help";
#[cfg(not(target_os = "windows"))]
pub const WINDOW_MENU_LABEL: &str = "Window";
pub const DESKTOP_LOG_FILE: &str = "desktop.log";
pub const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
pub const LOG_BACKUP_COUNT: usize = 5;

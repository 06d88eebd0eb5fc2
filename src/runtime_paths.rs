use std::{env, path::PathBuf};

use tauri::{path::BaseDirectory, AppHandle, Manager};

use crate::HELP_ROOT_ENV;

pub fn default_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(HELP_ROOT_ENV) {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(".help-browser"))
}

pub fn resolve_resource_path(app: &AppHandle, relative_path: &str) -> Option<PathBuf> {
    app.path()
        .resolve(relative_path, BaseDirectory::Resource)
        .ok()
        .filter(|path| path.is_file())
}

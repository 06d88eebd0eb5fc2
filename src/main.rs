#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod availability_probe;
mod help_browser;
mod help_config;
mod help_locators;
mod help_menu_actions;
mod help_menu_handler;
mod logging;
mod main_window;
#[cfg(target_os = "windows")]
mod native_system_menu;
mod resource_selector;
mod runtime_paths;
mod system_menu;
#[cfg(test)]
mod test_fakes;
mod webview_surface;
#[cfg(not(target_os = "windows"))]
mod window_menu;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{
    append_menu_log, append_navigation_log, append_probe_log, append_startup_log,
    desktop_log_path,
};
pub(crate) use app_types::AppHelpBrowserState;
pub(crate) use help_browser::{
    HelpBrowser, RenderingSurface, SystemCommandDisposition, WindowChrome,
};
pub(crate) use help_locators::{HelpBrowserError, HelpLocators, HelpSource};
pub(crate) use help_menu_actions::HelpMenuAction;
pub(crate) use resource_selector::ReachabilityProbe;

fn main() {
    app_runtime::run();
}

use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Manager, WebviewWindow, Wry,
};

use crate::{append_menu_log, HelpMenuAction, WindowChrome, WINDOW_MENU_LABEL};

/// Stand-in for the native control menu on platforms without one: a
/// "Window" submenu holding the standard window commands, which the
/// help commands are appended to. Item ids are the decimal command ids.
pub struct WindowMenuChrome {
    window: WebviewWindow,
    submenu: Submenu<Wry>,
}

impl WindowMenuChrome {
    pub fn attach(window: &WebviewWindow) -> Result<Self, String> {
        let submenu = install_window_submenu(window)?;
        Ok(Self {
            window: window.clone(),
            submenu,
        })
    }
}

/// macOS keeps the default application menu (app, Edit, Window...) so the
/// standard shortcuts survive; the help items go into its "Window" submenu.
#[cfg(target_os = "macos")]
fn install_window_submenu(window: &WebviewWindow) -> Result<Submenu<Wry>, String> {
    let app_handle = window.app_handle();
    let menu = Menu::default(app_handle)
        .map_err(|error| format!("Failed to build default application menu: {error}"))?;
    let items = menu
        .items()
        .map_err(|error| format!("Failed to read application menu: {error}"))?;
    let submenus: Vec<Submenu<Wry>> = items
        .iter()
        .filter_map(|item| item.as_submenu().cloned())
        .collect();
    let labels: Vec<String> = submenus
        .iter()
        .map(|submenu| submenu.text().unwrap_or_default())
        .collect();

    let submenu = match window_submenu_position(&labels) {
        Some(index) => submenus[index].clone(),
        None => {
            let submenu = standard_window_submenu(app_handle)?;
            menu.append(&submenu)
                .map_err(|error| format!("Failed to append window submenu: {error}"))?;
            submenu
        }
    };

    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;
    Ok(submenu)
}

#[cfg(not(target_os = "macos"))]
fn install_window_submenu(window: &WebviewWindow) -> Result<Submenu<Wry>, String> {
    let submenu = standard_window_submenu(window.app_handle())?;
    let menu = Menu::with_items(window.app_handle(), &[&submenu])
        .map_err(|error| format!("Failed to build window menu: {error}"))?;
    window
        .set_menu(menu)
        .map_err(|error| format!("Failed to install window menu: {error}"))?;
    Ok(submenu)
}

fn standard_window_submenu(app_handle: &AppHandle) -> Result<Submenu<Wry>, String> {
    let minimize = PredefinedMenuItem::minimize(app_handle, None)
        .map_err(|error| format!("Failed to create minimize menu item: {error}"))?;
    let maximize = PredefinedMenuItem::maximize(app_handle, None)
        .map_err(|error| format!("Failed to create maximize menu item: {error}"))?;
    let close = PredefinedMenuItem::close_window(app_handle, None)
        .map_err(|error| format!("Failed to create close menu item: {error}"))?;
    Submenu::with_items(
        app_handle,
        WINDOW_MENU_LABEL,
        true,
        &[&minimize, &maximize, &close],
    )
    .map_err(|error| format!("Failed to create window submenu: {error}"))
}

#[cfg(any(target_os = "macos", test))]
fn window_submenu_position(labels: &[String]) -> Option<usize> {
    labels.iter().position(|label| label == WINDOW_MENU_LABEL)
}

impl WindowChrome for WindowMenuChrome {
    fn insert_menu_separator(&mut self) -> Result<(), String> {
        let separator = PredefinedMenuItem::separator(self.window.app_handle())
            .map_err(|error| format!("Failed to create separator menu item: {error}"))?;
        self.submenu
            .append(&separator)
            .map_err(|error| format!("Failed to append separator menu item: {error}"))
    }

    fn insert_menu_command(&mut self, action: HelpMenuAction) -> Result<(), String> {
        let item = MenuItem::with_id(
            self.window.app_handle(),
            action.menu_id(),
            action.label(),
            true,
            None::<&str>,
        )
        .map_err(|error| format!("Failed to create '{}' menu item: {error}", action.label()))?;
        self.submenu
            .append(&item)
            .map_err(|error| format!("Failed to append '{}' menu item: {error}", action.label()))
    }

    fn set_title(&self, title: &str) {
        if let Err(error) = self.window.set_title(title) {
            append_menu_log(&format!("failed to update help window title: {error}"));
        }
    }
}

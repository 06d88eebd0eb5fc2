use tauri::{AppHandle, Manager};

use crate::{help_menu_actions, AppHelpBrowserState, SystemCommandDisposition};

/// Routes a native system command to the help window. Returns `true` when
/// the command was one of ours and the default window procedure must be
/// skipped.
pub fn handle_system_command(app_handle: &AppHandle, command_id: u32) -> bool {
    let Some(state) = app_handle.try_state::<AppHelpBrowserState>() else {
        return false;
    };

    match state.handle_system_command(command_id) {
        SystemCommandDisposition::Handled(_) => true,
        SystemCommandDisposition::PassThrough => false,
    }
}

pub fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = help_menu_actions::action_from_menu_id(menu_id) else {
        return;
    };
    handle_system_command(app_handle, action.command_id());
}

pub fn handle_document_title_changed(app_handle: &AppHandle) {
    if let Some(state) = app_handle.try_state::<AppHelpBrowserState>() {
        state.refresh_title();
    }
}

use tauri::{AppHandle, Manager, WebviewWindow};
use windows::{
    core::{HSTRING, PCWSTR},
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, WPARAM},
        UI::{
            Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass},
            WindowsAndMessaging::{
                GetSystemMenu, InsertMenuW, HMENU, MF_BYPOSITION, MF_SEPARATOR, MF_STRING,
                WM_NCDESTROY, WM_SYSCOMMAND,
            },
        },
    },
};

use crate::{append_menu_log, help_menu_handler, HelpMenuAction, WindowChrome};

// Restore, Move, Size, Minimize, Maximize occupy 0..=4; Close stays last.
const FIRST_HELP_MENU_POSITION: u32 = 5;
const HELP_SUBCLASS_ID: usize = 0x4845_4C50;

type SystemCommandCallback = Box<dyn Fn(u32) -> bool>;

/// The window's native control menu, augmented in place. Handles are kept
/// as integers so the chrome can live in managed state.
pub struct NativeSystemMenuChrome {
    window: WebviewWindow,
    menu_handle: isize,
    next_position: u32,
}

impl NativeSystemMenuChrome {
    pub fn attach(window: &WebviewWindow) -> Result<Self, String> {
        let raw_hwnd = window
            .hwnd()
            .map_err(|error| format!("Failed to acquire help window handle: {error}"))?;
        let hwnd = HWND(raw_hwnd.0);

        let menu = unsafe { GetSystemMenu(hwnd, false) };
        if menu.is_invalid() {
            return Err("Failed to acquire help window system menu.".to_string());
        }

        install_system_command_hook(hwnd, window.app_handle().clone())?;

        Ok(Self {
            window: window.clone(),
            menu_handle: menu.0 as isize,
            next_position: FIRST_HELP_MENU_POSITION,
        })
    }

    fn insert(&mut self, separator: bool, command_id: u32, label: &str) -> Result<(), String> {
        let menu = HMENU(self.menu_handle as *mut _);
        let position = self.next_position;
        let result = unsafe {
            if separator {
                InsertMenuW(menu, position, MF_BYPOSITION | MF_SEPARATOR, 0, PCWSTR::null())
            } else {
                InsertMenuW(
                    menu,
                    position,
                    MF_BYPOSITION | MF_STRING,
                    command_id as usize,
                    &HSTRING::from(label),
                )
            }
        };
        result.map_err(|error| {
            format!("Failed to insert system menu entry at position {position}: {error}")
        })?;
        self.next_position += 1;
        Ok(())
    }
}

impl WindowChrome for NativeSystemMenuChrome {
    fn insert_menu_separator(&mut self) -> Result<(), String> {
        self.insert(true, 0, "")
    }

    fn insert_menu_command(&mut self, action: HelpMenuAction) -> Result<(), String> {
        self.insert(false, action.command_id(), action.label())
    }

    fn set_title(&self, title: &str) {
        if let Err(error) = self.window.set_title(title) {
            append_menu_log(&format!("failed to update help window title: {error}"));
        }
    }
}

fn install_system_command_hook(hwnd: HWND, app_handle: AppHandle) -> Result<(), String> {
    let callback: SystemCommandCallback = Box::new(move |command_id| {
        help_menu_handler::handle_system_command(&app_handle, command_id)
    });
    let ref_data = Box::into_raw(Box::new(callback)) as usize;

    let installed = unsafe {
        SetWindowSubclass(hwnd, Some(help_subclass_proc), HELP_SUBCLASS_ID, ref_data)
    };
    if !installed.as_bool() {
        drop(unsafe { Box::from_raw(ref_data as *mut SystemCommandCallback) });
        return Err("Failed to subclass help window for system commands.".to_string());
    }
    Ok(())
}

unsafe extern "system" fn help_subclass_proc(
    hwnd: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _subclass_id: usize,
    ref_data: usize,
) -> LRESULT {
    match message {
        WM_SYSCOMMAND => {
            let callback = &*(ref_data as *const SystemCommandCallback);
            if callback(wparam.0 as u32) {
                return LRESULT(0);
            }
        }
        WM_NCDESTROY => {
            let _ = RemoveWindowSubclass(hwnd, Some(help_subclass_proc), HELP_SUBCLASS_ID);
            drop(Box::from_raw(ref_data as *mut SystemCommandCallback));
        }
        _ => {}
    }
    DefSubclassProc(hwnd, message, wparam, lparam)
}

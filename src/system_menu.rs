use tauri::WebviewWindow;

#[cfg(target_os = "windows")]
pub type PlatformChrome = crate::native_system_menu::NativeSystemMenuChrome;
#[cfg(not(target_os = "windows"))]
pub type PlatformChrome = crate::window_menu::WindowMenuChrome;

pub fn attach_platform_chrome(window: &WebviewWindow) -> Result<PlatformChrome, String> {
    PlatformChrome::attach(window)
}

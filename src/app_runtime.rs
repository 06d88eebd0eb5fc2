use tauri::{webview::PageLoadEvent, AppHandle, Manager, RunEvent};

use crate::{
    append_navigation_log, append_startup_log, availability_probe::HttpReachabilityProbe,
    desktop_log_path, help_config::HelpConfig, help_menu_handler, main_window, runtime_paths,
    system_menu, webview_surface::{DocumentTitleSlot, WebviewSurface},
    HelpBrowser, HelpBrowserError, AppHelpBrowserState, HelpLocators, OFFLINE_HELP_RESOURCE,
};

pub(crate) fn run() {
    append_startup_log("help browser starting");
    append_startup_log(&format!("desktop log path: {}", desktop_log_path().display()));

    tauri::Builder::default()
        .manage(AppHelpBrowserState::default())
        .on_menu_event(|app, event| {
            help_menu_handler::handle_menu_event(app, event.id().as_ref())
        })
        .on_page_load(|_webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_navigation_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_navigation_log(&format!("page-load finished: {}", payload.url()));
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            if let Err(error) = open_help_window(&app_handle) {
                show_startup_error(&app_handle, &error);
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| {
            if let RunEvent::Exit = event {
                append_startup_log("help browser exiting");
            }
        });
}

fn open_help_window(app_handle: &AppHandle) -> Result<(), String> {
    let bundled_offline_page =
        runtime_paths::resolve_resource_path(app_handle, OFFLINE_HELP_RESOURCE);
    let config = HelpConfig::from_env(bundled_offline_page.as_deref(), append_startup_log)?;

    // Locators are validated before any window or menu exists.
    let locators = HelpLocators::parse(&config.online_url, &config.offline_url)
        .map_err(|error| error.to_string())?;
    append_startup_log(&format!(
        "help locators: online={} offline={}",
        locators.online(),
        locators.offline()
    ));

    let document_title = DocumentTitleSlot::default();
    let window = main_window::build_help_window(app_handle, document_title.clone())?;
    let chrome = system_menu::attach_platform_chrome(&window)
        .map_err(|error| HelpBrowserError::MenuSetup(error).to_string())?;
    let surface = WebviewSurface::new(window.clone(), document_title);
    let probe = HttpReachabilityProbe::new(config.probe_timeout);

    let browser =
        HelpBrowser::new(locators, chrome, surface, &probe).map_err(|error| error.to_string())?;
    append_startup_log(&format!(
        "help window opened on {} help",
        browser.initial_source()
    ));
    let state = app_handle.state::<AppHelpBrowserState>();
    state.install(browser)?;
    state.refresh_title();

    window
        .show()
        .map_err(|error| format!("Failed to show help window: {error}"))?;
    if let Err(error) = window.set_focus() {
        append_startup_log(&format!("failed to focus help window: {error}"));
    }
    Ok(())
}

fn show_startup_error(app_handle: &AppHandle, message: &str) {
    append_startup_log(&format!("help browser startup failed: {message}"));
    eprintln!("Help browser startup failed: {message}");
    app_handle.exit(1);
}

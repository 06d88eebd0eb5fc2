use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{
    help_menu_handler, webview_surface::DocumentTitleSlot, DEFAULT_WINDOW_TITLE,
    HELP_WINDOW_LABEL,
};

const PLACEHOLDER_PAGE: &str = "about:blank";

/// Builds the hidden help window on a blank page; the first real
/// navigation happens once the help source has been selected.
pub fn build_help_window(
    app_handle: &AppHandle,
    document_title: DocumentTitleSlot,
) -> Result<WebviewWindow, String> {
    let blank = Url::parse(PLACEHOLDER_PAGE)
        .map_err(|error| format!("Failed to build blank page URL: {error}"))?;

    WebviewWindowBuilder::new(app_handle, HELP_WINDOW_LABEL, WebviewUrl::External(blank))
        .title(DEFAULT_WINDOW_TITLE)
        .inner_size(960.0, 720.0)
        .visible(false)
        .on_document_title_changed(move |window, title| {
            if window.url().is_ok_and(|url| is_placeholder_page(&url)) {
                return;
            }
            document_title.record(title);
            help_menu_handler::handle_document_title_changed(window.app_handle());
        })
        .build()
        .map_err(|error| format!("Failed to create help window: {error}"))
}

fn is_placeholder_page(url: &Url) -> bool {
    url.as_str() == PLACEHOLDER_PAGE
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::is_placeholder_page;

    #[test]
    fn is_placeholder_page_matches_only_blank_page() {
        let blank = Url::parse("about:blank").expect("valid url");
        let online = Url::parse("https://help.example.com/docs").expect("valid url");
        let offline = Url::parse("file:///opt/app/help/offline.html").expect("valid url");

        assert!(is_placeholder_page(&blank));
        assert!(!is_placeholder_page(&online));
        assert!(!is_placeholder_page(&offline));
    }
}

use std::sync::{Arc, Mutex};

use tauri::WebviewWindow;
use url::Url;

use crate::{append_navigation_log, RenderingSurface};

/// Latest document title reported by the webview. Shared between the
/// webview's title callback and the surface.
#[derive(Debug, Clone, Default)]
pub struct DocumentTitleSlot(Arc<Mutex<Option<String>>>);

impl DocumentTitleSlot {
    pub fn record(&self, title: String) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = Some(title);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = None;
        }
    }

    pub fn current(&self) -> Option<String> {
        self.0.lock().ok().and_then(|guard| guard.clone())
    }
}

pub struct WebviewSurface {
    window: WebviewWindow,
    document_title: DocumentTitleSlot,
}

impl WebviewSurface {
    pub fn new(window: WebviewWindow, document_title: DocumentTitleSlot) -> Self {
        Self {
            window,
            document_title,
        }
    }
}

impl RenderingSurface for WebviewSurface {
    fn navigate(&self, locator: &Url) {
        // The previous page's title must not outlive it.
        self.document_title.clear();
        if let Err(error) = self.window.navigate(locator.clone()) {
            append_navigation_log(&format!("failed to navigate help webview to {locator}: {error}"));
        }
    }

    fn document_title(&self) -> Option<String> {
        self.document_title.current()
    }
}

use std::sync::Mutex;

use crate::{
    system_menu::PlatformChrome, webview_surface::WebviewSurface, HelpBrowser, RenderingSurface,
    SystemCommandDisposition, WindowChrome,
};

pub(crate) type AppHelpBrowserState = HelpBrowserState<PlatformChrome, WebviewSurface>;

pub(crate) struct HelpBrowserState<C, S> {
    browser: Mutex<Option<HelpBrowser<C, S>>>,
}

impl<C, S> Default for HelpBrowserState<C, S> {
    fn default() -> Self {
        Self {
            browser: Mutex::new(None),
        }
    }
}

impl<C, S> HelpBrowserState<C, S>
where
    C: WindowChrome,
    S: RenderingSurface,
{
    pub(crate) fn install(&self, browser: HelpBrowser<C, S>) -> Result<(), String> {
        let mut guard = self
            .browser
            .lock()
            .map_err(|_| "Help browser state lock poisoned.".to_string())?;
        if guard.is_some() {
            return Err("Help window is already open.".to_string());
        }
        *guard = Some(browser);
        Ok(())
    }

    /// Re-entrant dispatch (a command arriving while another handler holds
    /// the lock) falls through to default handling.
    pub(crate) fn handle_system_command(&self, command_id: u32) -> SystemCommandDisposition {
        match self.browser.try_lock() {
            Ok(guard) => guard
                .as_ref()
                .map(|browser| browser.handle_system_command(command_id))
                .unwrap_or(SystemCommandDisposition::PassThrough),
            Err(_) => SystemCommandDisposition::PassThrough,
        }
    }

    /// Skipped while the lock is held; the surface keeps the latest title
    /// for the next refresh.
    pub(crate) fn refresh_title(&self) {
        if let Ok(guard) = self.browser.try_lock() {
            if let Some(browser) = guard.as_ref() {
                browser.refresh_title();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HelpBrowserState;
    use crate::{
        test_fakes::{
            open_recording_browser, CountingReachability, RecordingChrome, RecordingSurface, OFFLINE,
            ONLINE,
        },
        HelpSource, SystemCommandDisposition,
    };

    type RecordingState = HelpBrowserState<RecordingChrome, RecordingSurface>;

    #[test]
    fn handle_system_command_passes_through_before_install() {
        let state = RecordingState::default();

        assert_eq!(
            state.handle_system_command(1000),
            SystemCommandDisposition::PassThrough
        );
    }

    #[test]
    fn handle_system_command_routes_to_installed_browser() {
        let reachability = CountingReachability::answering(false);
        let state = RecordingState::default();
        state
            .install(open_recording_browser(&reachability))
            .expect("first install succeeds");

        assert_eq!(
            state.handle_system_command(1000),
            SystemCommandDisposition::Handled(HelpSource::Online)
        );
        let guard = state.browser.lock().expect("state lock");
        let browser = guard.as_ref().expect("browser installed");
        assert_eq!(browser.surface().loaded().as_deref(), Some(ONLINE));
    }

    #[test]
    fn install_rejects_second_browser() {
        let reachability = CountingReachability::answering(true);
        let state = RecordingState::default();
        state
            .install(open_recording_browser(&reachability))
            .expect("first install succeeds");

        let error = state
            .install(open_recording_browser(&reachability))
            .expect_err("second install is rejected");

        assert_eq!(error, "Help window is already open.");
    }

    #[test]
    fn reentrant_system_command_passes_through_without_navigating() {
        let reachability = CountingReachability::answering(false);
        let state = RecordingState::default();
        state
            .install(open_recording_browser(&reachability))
            .expect("first install succeeds");

        let guard = state.browser.lock().expect("state lock");
        assert_eq!(
            state.handle_system_command(1000),
            SystemCommandDisposition::PassThrough
        );
        assert_eq!(
            state.handle_system_command(1001),
            SystemCommandDisposition::PassThrough
        );

        let browser = guard.as_ref().expect("browser installed");
        assert_eq!(browser.surface().navigations.borrow().len(), 1);
        assert_eq!(browser.surface().loaded().as_deref(), Some(OFFLINE));
    }

    #[test]
    fn reentrant_refresh_title_is_skipped_and_applied_later() {
        let reachability = CountingReachability::answering(true);
        let state = RecordingState::default();
        state
            .install(open_recording_browser(&reachability))
            .expect("first install succeeds");

        {
            let guard = state.browser.lock().expect("state lock");
            let browser = guard.as_ref().expect("browser installed");
            *browser.surface().title.borrow_mut() = Some("Index".to_string());
            state.refresh_title();
            assert_eq!(*browser.chrome().title.borrow(), None);
        }

        state.refresh_title();

        let guard = state.browser.lock().expect("state lock");
        let browser = guard.as_ref().expect("browser installed");
        assert_eq!(browser.chrome().title.borrow().as_deref(), Some("Index"));
    }
}

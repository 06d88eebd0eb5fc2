use url::Url;

use crate::{
    append_menu_log, append_navigation_log, help_menu_actions, resource_selector,
    HelpBrowserError, HelpLocators, HelpMenuAction, HelpSource, ReachabilityProbe,
};

/// The embedded document surface. Navigation errors stay inside the surface.
pub trait RenderingSurface {
    fn navigate(&self, locator: &Url);

    fn document_title(&self) -> Option<String>;
}

/// Window decorations the help window needs: the control menu and the title.
pub trait WindowChrome {
    fn insert_menu_separator(&mut self) -> Result<(), String>;

    fn insert_menu_command(&mut self, action: HelpMenuAction) -> Result<(), String>;

    fn set_title(&self, title: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemCommandDisposition {
    Handled(HelpSource),
    /// Not ours; the caller must run the default window procedure.
    PassThrough,
}

pub struct HelpBrowser<C, S> {
    locators: HelpLocators,
    chrome: C,
    surface: S,
    initial_source: HelpSource,
}

impl<C, S> HelpBrowser<C, S>
where
    C: WindowChrome,
    S: RenderingSurface,
{
    pub fn new<P>(
        locators: HelpLocators,
        mut chrome: C,
        surface: S,
        probe: &P,
    ) -> Result<Self, HelpBrowserError>
    where
        P: ReachabilityProbe + ?Sized,
    {
        install_help_menu(&mut chrome)?;

        let (initial_source, initial_locator) = resource_selector::select(&locators, probe);
        append_navigation_log(&format!(
            "initial help source: {initial_source} ({initial_locator})"
        ));
        surface.navigate(initial_locator);

        Ok(Self {
            locators,
            chrome,
            surface,
            initial_source,
        })
    }

    pub fn initial_source(&self) -> HelpSource {
        self.initial_source
    }

    pub fn show(&self, source: HelpSource) {
        let locator = self.locators.for_source(source);
        append_navigation_log(&format!("navigating to {source} help: {locator}"));
        self.surface.navigate(locator);
    }

    pub fn handle_system_command(&self, command_id: u32) -> SystemCommandDisposition {
        match help_menu_actions::action_from_system_command(command_id) {
            Some(action) => {
                append_menu_log(&format!("help menu command selected: {}", action.label()));
                let target = action.target();
                self.show(target);
                SystemCommandDisposition::Handled(target)
            }
            None => SystemCommandDisposition::PassThrough,
        }
    }

    pub fn handle_document_title_changed(&self, title: &str) {
        append_navigation_log(&format!("help window title: {title}"));
        self.chrome.set_title(title);
    }

    /// For surfaces whose title notification carries no payload.
    pub fn refresh_title(&self) {
        if let Some(title) = self.surface.document_title() {
            self.handle_document_title_changed(&title);
        }
    }

    #[cfg(test)]
    pub(crate) fn chrome(&self) -> &C {
        &self.chrome
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }
}

fn install_help_menu<C: WindowChrome>(chrome: &mut C) -> Result<(), HelpBrowserError> {
    chrome
        .insert_menu_separator()
        .map_err(HelpBrowserError::MenuSetup)?;
    for action in HelpMenuAction::ALL {
        chrome
            .insert_menu_command(action)
            .map_err(HelpBrowserError::MenuSetup)?;
    }
    append_menu_log("help menu commands installed");
    Ok(())
}

use std::cell::{Cell, RefCell};

use url::Url;

use crate::{
    HelpBrowser, HelpLocators, HelpMenuAction, ReachabilityProbe, RenderingSurface, WindowChrome,
};

pub(crate) const ONLINE: &str = "https://help.example.com/docs";
pub(crate) const OFFLINE: &str = "file:///C:/app/help/offline.html";
pub(crate) const SC_CLOSE: u32 = 0xF060;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuEntry {
    Separator,
    Command(u32, &'static str),
}

#[derive(Default)]
pub(crate) struct RecordingChrome {
    pub(crate) entries: Vec<MenuEntry>,
    pub(crate) title: RefCell<Option<String>>,
    fail_at_entry: Option<usize>,
}

impl RecordingChrome {
    pub(crate) fn failing_at(entry: usize) -> Self {
        Self {
            fail_at_entry: Some(entry),
            ..Self::default()
        }
    }

    fn push(&mut self, entry: MenuEntry) -> Result<(), String> {
        if self.fail_at_entry == Some(self.entries.len()) {
            return Err("InsertMenuW failed".to_string());
        }
        self.entries.push(entry);
        Ok(())
    }
}

impl WindowChrome for RecordingChrome {
    fn insert_menu_separator(&mut self) -> Result<(), String> {
        self.push(MenuEntry::Separator)
    }

    fn insert_menu_command(&mut self, action: HelpMenuAction) -> Result<(), String> {
        self.push(MenuEntry::Command(action.command_id(), action.label()))
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = Some(title.to_string());
    }
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub(crate) navigations: RefCell<Vec<String>>,
    pub(crate) title: RefCell<Option<String>>,
}

impl RecordingSurface {
    pub(crate) fn loaded(&self) -> Option<String> {
        self.navigations.borrow().last().cloned()
    }
}

impl RenderingSurface for RecordingSurface {
    fn navigate(&self, locator: &Url) {
        self.navigations.borrow_mut().push(locator.to_string());
    }

    fn document_title(&self) -> Option<String> {
        self.title.borrow().clone()
    }
}

pub(crate) struct CountingReachability {
    available: bool,
    pub(crate) calls: Cell<usize>,
}

impl CountingReachability {
    pub(crate) fn answering(available: bool) -> Self {
        Self {
            available,
            calls: Cell::new(0),
        }
    }
}

impl ReachabilityProbe for CountingReachability {
    fn is_available(&self, _locator: &Url) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.available
    }
}

pub(crate) fn sample_locators() -> HelpLocators {
    HelpLocators::parse(ONLINE, OFFLINE).expect("sample locators should parse")
}

pub(crate) fn open_recording_browser(
    reachability: &CountingReachability,
) -> HelpBrowser<RecordingChrome, RecordingSurface> {
    HelpBrowser::new(
        sample_locators(),
        RecordingChrome::default(),
        RecordingSurface::default(),
        reachability,
    )
    .expect("help browser should open")
}

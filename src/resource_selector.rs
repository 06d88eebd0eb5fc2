use url::Url;

use crate::{HelpLocators, HelpSource};

/// Answers whether a locator is reachable right now. Implementations
/// collapse every failure into `false`.
pub trait ReachabilityProbe {
    fn is_available(&self, locator: &Url) -> bool;
}

impl<F> ReachabilityProbe for F
where
    F: Fn(&Url) -> bool,
{
    fn is_available(&self, locator: &Url) -> bool {
        self(locator)
    }
}

/// Probes the online locator once and picks it only when the probe
/// succeeds; every other outcome picks the offline locator.
pub fn select<'a, P>(locators: &'a HelpLocators, probe: &P) -> (HelpSource, &'a Url)
where
    P: ReachabilityProbe + ?Sized,
{
    let source = if probe.is_available(locators.online()) {
        HelpSource::Online
    } else {
        HelpSource::Offline
    };
    (source, locators.for_source(source))
}

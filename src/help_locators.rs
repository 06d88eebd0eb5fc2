use std::fmt;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpSource {
    Online,
    Offline,
}

impl HelpSource {
    pub fn as_str(self) -> &'static str {
        match self {
            HelpSource::Online => "online",
            HelpSource::Offline => "offline",
        }
    }
}

impl fmt::Display for HelpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion accepted by the construction API: typed URLs pass through,
/// strings are parsed.
pub trait IntoLocator {
    /// Text shown in configuration errors.
    fn raw_input(&self) -> String;

    fn into_locator(self) -> Result<Url, url::ParseError>;
}

impl IntoLocator for Url {
    fn raw_input(&self) -> String {
        self.to_string()
    }

    fn into_locator(self) -> Result<Url, url::ParseError> {
        Ok(self)
    }
}

impl IntoLocator for &Url {
    fn raw_input(&self) -> String {
        self.to_string()
    }

    fn into_locator(self) -> Result<Url, url::ParseError> {
        Ok(self.clone())
    }
}

impl IntoLocator for &str {
    fn raw_input(&self) -> String {
        (*self).to_string()
    }

    fn into_locator(self) -> Result<Url, url::ParseError> {
        Url::parse(self.trim())
    }
}

impl IntoLocator for String {
    fn raw_input(&self) -> String {
        self.clone()
    }

    fn into_locator(self) -> Result<Url, url::ParseError> {
        self.as_str().into_locator()
    }
}

impl IntoLocator for &String {
    fn raw_input(&self) -> String {
        (*self).clone()
    }

    fn into_locator(self) -> Result<Url, url::ParseError> {
        self.as_str().into_locator()
    }
}

#[derive(Debug)]
pub enum HelpBrowserError {
    InvalidLocator {
        role: HelpSource,
        input: String,
        source: url::ParseError,
    },
    MenuSetup(String),
}

impl fmt::Display for HelpBrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpBrowserError::InvalidLocator {
                role,
                input,
                source,
            } => write!(f, "Invalid {role} help URL '{input}': {source}"),
            HelpBrowserError::MenuSetup(reason) => {
                write!(f, "Failed to set up help window menu: {reason}")
            }
        }
    }
}

impl std::error::Error for HelpBrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HelpBrowserError::InvalidLocator { source, .. } => Some(source),
            HelpBrowserError::MenuSetup(_) => None,
        }
    }
}

/// The online/offline pair shown by one help window. Fixed for the
/// lifetime of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLocators {
    online: Url,
    offline: Url,
}

impl HelpLocators {
    pub fn new(online: Url, offline: Url) -> Self {
        Self { online, offline }
    }

    pub fn parse(online: &str, offline: &str) -> Result<Self, HelpBrowserError> {
        Self::from_inputs(online, offline)
    }

    pub fn from_inputs<O, F>(online: O, offline: F) -> Result<Self, HelpBrowserError>
    where
        O: IntoLocator,
        F: IntoLocator,
    {
        let online = convert_locator(HelpSource::Online, online)?;
        let offline = convert_locator(HelpSource::Offline, offline)?;
        Ok(Self::new(online, offline))
    }

    pub fn online(&self) -> &Url {
        &self.online
    }

    pub fn offline(&self) -> &Url {
        &self.offline
    }

    pub fn for_source(&self, source: HelpSource) -> &Url {
        match source {
            HelpSource::Online => &self.online,
            HelpSource::Offline => &self.offline,
        }
    }
}

fn convert_locator<L: IntoLocator>(role: HelpSource, input: L) -> Result<Url, HelpBrowserError> {
    let raw_input = input.raw_input();
    input
        .into_locator()
        .map_err(|source| HelpBrowserError::InvalidLocator {
            role,
            input: raw_input,
            source,
        })
}

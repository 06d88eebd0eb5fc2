use std::{env, path::Path, time::Duration};

use url::Url;

use crate::{
    DEFAULT_ONLINE_HELP_URL, DEFAULT_PROBE_TIMEOUT_MS, OFFLINE_HELP_URL_ENV, ONLINE_HELP_URL_ENV,
    PROBE_TIMEOUT_ENV, PROBE_TIMEOUT_MAX_MS, PROBE_TIMEOUT_MIN_MS,
};

/// Raw locator inputs plus probe timeout. Locators are parsed later by
/// `HelpLocators` so malformed values surface as configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpConfig {
    pub online_url: String,
    pub offline_url: String,
    pub probe_timeout: Option<Duration>,
}

impl HelpConfig {
    pub fn from_env<F>(bundled_offline_page: Option<&Path>, log: F) -> Result<Self, String>
    where
        F: Fn(&str),
    {
        let online_url = resolve_online_url(env::var(ONLINE_HELP_URL_ENV).ok());
        let offline_url =
            resolve_offline_url(env::var(OFFLINE_HELP_URL_ENV).ok(), bundled_offline_page)?;
        let probe_timeout = resolve_probe_timeout(env::var(PROBE_TIMEOUT_ENV).ok(), log);
        Ok(Self {
            online_url,
            offline_url,
            probe_timeout,
        })
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn resolve_online_url(raw: Option<String>) -> String {
    non_blank(raw).unwrap_or_else(|| DEFAULT_ONLINE_HELP_URL.to_string())
}

pub fn resolve_offline_url(
    raw: Option<String>,
    bundled_offline_page: Option<&Path>,
) -> Result<String, String> {
    if let Some(value) = non_blank(raw) {
        return Ok(value);
    }

    let page = bundled_offline_page.ok_or_else(|| {
        format!("Bundled offline help is unavailable and {OFFLINE_HELP_URL_ENV} is not set.")
    })?;
    Url::from_file_path(page)
        .map(|url| url.to_string())
        .map_err(|_| {
            format!(
                "Bundled offline help path is not absolute: {}",
                page.display()
            )
        })
}

pub fn resolve_probe_timeout<F>(raw: Option<String>, log: F) -> Option<Duration>
where
    F: Fn(&str),
{
    let default_timeout = Some(Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS));
    let Some(value) = non_blank(raw) else {
        return default_timeout;
    };

    let parsed = match value.parse::<u64>() {
        Ok(parsed) => parsed,
        Err(error) => {
            log(&format!(
                "invalid {PROBE_TIMEOUT_ENV} '{value}': {error}; using {DEFAULT_PROBE_TIMEOUT_MS}ms"
            ));
            return default_timeout;
        }
    };
    if parsed == 0 {
        return None;
    }

    let clamped = parsed.clamp(PROBE_TIMEOUT_MIN_MS, PROBE_TIMEOUT_MAX_MS);
    if clamped != parsed {
        log(&format!(
            "{PROBE_TIMEOUT_ENV}={parsed} out of range, clamped to {clamped}ms"
        ));
    }
    Some(Duration::from_millis(clamped))
}

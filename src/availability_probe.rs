use std::time::Duration;

use reqwest::{redirect, Client, StatusCode};
use url::Url;

use crate::{append_probe_log, resource_selector::ReachabilityProbe};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Status(u16),
    TransportError(String),
}

impl ProbeOutcome {
    /// Only an exact `200 OK` counts; redirects and other 2xx codes do not.
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Status(status) if *status == StatusCode::OK.as_u16())
    }
}

/// Single blocking GET against the online locator.
pub struct HttpReachabilityProbe {
    client: Result<Client, String>,
}

impl HttpReachabilityProbe {
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder().redirect(redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|error| format!("Failed to build probe HTTP client: {error}"));
        Self { client }
    }

    pub fn probe(&self, locator: &Url) -> ProbeOutcome {
        let client = match &self.client {
            Ok(client) => client,
            Err(error) => return ProbeOutcome::TransportError(error.clone()),
        };

        let request = client.get(locator.clone());
        tauri::async_runtime::block_on(async move {
            match request.send().await {
                Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
                Err(error) => ProbeOutcome::TransportError(error.to_string()),
            }
        })
    }
}

impl ReachabilityProbe for HttpReachabilityProbe {
    fn is_available(&self, locator: &Url) -> bool {
        let outcome = self.probe(locator);
        match &outcome {
            ProbeOutcome::Status(status) => {
                append_probe_log(&format!("GET {locator} answered with status {status}"))
            }
            ProbeOutcome::TransportError(error) => {
                append_probe_log(&format!("GET {locator} failed: {error}"))
            }
        }
        outcome.is_available()
    }
}

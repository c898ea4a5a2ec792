use crate::configuration::BeaconSettings;
use crate::errors::BeaconError;
use crate::fingerprint::generate_fingerprint;
use crate::models::{Payload, StatsResponse};
use crate::stats::{STATS_ERROR_HTML, render_stats};

/// One beacon run's view of the collector: a reqwest client plus the
/// configured base URL. Each page-load equivalent builds a fresh payload,
/// sends it, and optionally pulls the stats summary back down.
pub struct BeaconClient {
    http: reqwest::Client,
    collector_url: String,
}

impl BeaconClient {
    #[must_use]
    pub fn new(collector_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            collector_url: collector_url.trim_end_matches('/').to_string(),
        }
    }

    /// Assemble the payload the way the page script would: fresh
    /// pseudo-fingerprint, configured screen, configured (or default)
    /// user agent.
    #[must_use]
    pub fn collect(settings: &BeaconSettings) -> Payload {
        Payload {
            fingerprint: generate_fingerprint(),
            screen: settings.screen.to_string(),
            user_agent: settings
                .user_agent
                .clone()
                .unwrap_or_else(default_user_agent),
        }
    }

    #[allow(clippy::missing_errors_doc)]
    #[tracing::instrument(
        name = "Send telemetry payload",
        skip(self, payload),
        fields(screen = %payload.screen)
    )]
    pub async fn send(&self, payload: &Payload) -> Result<(), BeaconError> {
        let response = self
            .http
            .post(format!("{}/log", self.collector_url))
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BeaconError::Collector(response.status()));
        }

        Ok(())
    }

    #[allow(clippy::missing_errors_doc)]
    #[tracing::instrument(name = "Fetch stats summary", skip(self))]
    pub async fn fetch_stats(&self) -> Result<StatsResponse, BeaconError> {
        let response = self
            .http
            .get(format!("{}/get", self.collector_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BeaconError::Collector(response.status()));
        }

        // parse from text rather than `.json()` so a bad body is
        // distinguishable from a transport failure
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(BeaconError::MalformedResponse)
    }

    /// Fetch the summary and turn it into the stats fragment. Any failure
    /// collapses to the fixed error fragment after logging the cause; the
    /// caller always gets something it can put in front of a user.
    pub async fn fetch_and_render_stats(&self) -> String {
        match self.fetch_stats().await {
            Ok(stats) => render_stats(&stats),
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to fetch stats"
                );
                STATS_ERROR_HTML.to_string()
            }
        }
    }
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

use reqwest::StatusCode;

// two failure kinds matter to the beacon: the collector was unreachable
// (or said no), and the stats body didn't parse. No retries either way.
#[derive(thiserror::Error, Debug)]
pub enum BeaconError {
    #[error("Failed to reach the collector")]
    Request(#[from] reqwest::Error),
    #[error("Collector rejected the request with status {0}")]
    Collector(StatusCode),
    #[error("Collector returned a malformed stats body")]
    MalformedResponse(#[source] serde_json::Error),
}

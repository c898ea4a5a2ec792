use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The body the beacon sends to POST /log: exactly these three fields,
/// camelCase on the wire, anything extra is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payload {
    pub fingerprint: String,
    pub screen: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
}

/// A recorded visit. The timestamp is stamped by the collector on receipt,
/// never trusted from the client.
#[derive(Debug, Clone, Serialize)]
pub struct Visit {
    pub visit_id: Uuid,
    pub fingerprint: String,
    pub screen: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}

impl Visit {
    #[must_use]
    pub fn from_payload(payload: Payload, timestamp: DateTime<Utc>) -> Self {
        Self {
            visit_id: Uuid::new_v4(),
            fingerprint: payload.fingerprint,
            screen: payload.screen,
            user_agent: payload.user_agent,
            timestamp,
        }
    }
}

// "1920x1080" on the wire and in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScreenResolution {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for ScreenResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for ScreenResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once('x')
            .ok_or_else(|| format!("{s} is not a WIDTHxHEIGHT resolution"))?;
        Ok(Self {
            width: width
                .parse()
                .map_err(|_| format!("{width} is not a valid width"))?,
            height: height
                .parse()
                .map_err(|_| format!("{height} is not a valid height"))?,
        })
    }
}

impl TryFrom<String> for ScreenResolution {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ScreenResolution> for String {
    fn from(resolution: ScreenResolution) -> Self {
        resolution.to_string()
    }
}

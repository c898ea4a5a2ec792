use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Payload, Visit};

/// Process-local visit storage shared across workers through `web::Data`.
/// This is where a database would plug in; nothing in scope needs
/// durability, so a locked Vec is the whole engine.
#[derive(Clone, Default)]
pub struct VisitStore {
    visits: Arc<RwLock<Vec<Visit>>>,
}

impl VisitStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn record(&self, payload: Payload, timestamp: DateTime<Utc>) -> Result<Uuid, anyhow::Error> {
        let visit = Visit::from_payload(payload, timestamp);
        let visit_id = visit.visit_id;

        self.visits
            .write()
            .map_err(|_| anyhow::anyhow!("Visit store lock poisoned"))?
            .push(visit);

        Ok(visit_id)
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn snapshot(&self) -> Result<Vec<Visit>, anyhow::Error> {
        Ok(self
            .visits
            .read()
            .map_err(|_| anyhow::anyhow!("Visit store lock poisoned"))?
            .clone())
    }
}

use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::errors::VisitError;
use crate::stats::compute_stats;
use crate::store::VisitStore;

// GET /get (and /stats). Aggregation runs over a snapshot so the lock is
// released before any serialization work happens.
#[tracing::instrument(name = "Serve stats summary", skip(store))]
pub async fn get_stats(store: web::Data<VisitStore>) -> Result<HttpResponse, actix_web::Error> {
    let visits = store.snapshot().map_err(VisitError::UnexpectedError)?;
    let stats = compute_stats(&visits, Utc::now());

    tracing::info!(
        "Serving stats for {} visits ({} unique)",
        stats.total_visitors,
        stats.unique_visitors
    );

    Ok(HttpResponse::Ok().json(stats))
}

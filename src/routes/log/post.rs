use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::errors::VisitError;
use crate::models::Payload;
use crate::store::VisitStore;

// POST /log (and /post for the older page scripts). The timestamp is ours,
// not the client's; malformed bodies never make it past the Json extractor.
#[tracing::instrument(
    name = "Record visit",
    skip(payload, store),
    fields(screen = %payload.screen)
)]
pub async fn log_visit(
    payload: web::Json<Payload>,
    store: web::Data<VisitStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let visit_id = store
        .record(payload.into_inner(), Utc::now())
        .map_err(VisitError::UnexpectedError)?;

    tracing::info!("Visit recorded with: {}", visit_id);
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "success"})))
}

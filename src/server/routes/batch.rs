//! Batch query and edit endpoints
//!
//! The nine `/api/v2/Batch` endpoints: whole-store listings, per-trainer
//! time-window filters, id lookup, create/update, and batch types. Every
//! read that comes up empty resolves to the NotFound outcome (204); a
//! rejected write resolves to BadRequest (400).

use actix_web::{HttpResponse, web};
use chrono::Utc;
use tracing::{debug, info};

use crate::core::batch::{Batch, window};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// Configure batch endpoints
pub fn configure_batch_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v2/Batch")
            .route("/all", web::get().to(get_all_batches))
            .route("/past/{email}", web::get().to(get_past_batches))
            .route("/future/{email}", web::get().to(get_future_batches))
            .route("/inprogress/{email}", web::get().to(get_batch_in_progress))
            .route(
                "/allinprogress/{email}",
                web::get().to(get_all_batches_in_progress),
            )
            .route("/byid/{batch_id}", web::get().to(get_batch_by_id))
            .route("/updatebatch", web::post().to(update_batch))
            .route("/batchtypes", web::get().to(get_all_batch_types))
            .route("/currentbatches", web::get().to(get_current_batches)),
    );
}

/// Resolve a trainer email and fetch that trainer's batches, in store order
async fn batches_for_trainer(state: &AppState, email: &str) -> Result<Vec<Batch>> {
    let trainer = state
        .trainers
        .get_trainer_by_email(email)
        .await?
        .ok_or_else(|| GatewayError::not_found(format!("no trainer registered for {}", email)))?;

    state.batches.get_batch_by_trainer_id(trainer.id).await
}

/// Wrap a filtered listing, mapping an empty result to NotFound
fn listing_response(batches: Vec<Batch>, context: &str) -> Result<HttpResponse> {
    if batches.is_empty() {
        return Err(GatewayError::not_found(format!("no {} batches", context)));
    }
    Ok(HttpResponse::Ok().json(batches))
}

/// All batches in the store
/// GET /api/v2/Batch/all
pub async fn get_all_batches(data: web::Data<AppState>) -> Result<HttpResponse> {
    let batches = data.batches.get_batch_all().await?;
    listing_response(batches, "recorded")
}

/// Batches that already ended for a trainer
/// GET /api/v2/Batch/past/{email}
pub async fn get_past_batches(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let email = path.into_inner();
    let batches = batches_for_trainer(&data, &email).await?;

    let now = Utc::now();
    listing_response(window::past(batches, now), "past")
}

/// Batches that have not started yet for a trainer
/// GET /api/v2/Batch/future/{email}
pub async fn get_future_batches(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let email = path.into_inner();
    let batches = batches_for_trainer(&data, &email).await?;

    let now = Utc::now();
    listing_response(window::future(batches, now), "future")
}

/// The first currently running batch for a trainer, in store order
/// GET /api/v2/Batch/inprogress/{email}
pub async fn get_batch_in_progress(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let email = path.into_inner();
    let batches = batches_for_trainer(&data, &email).await?;

    let now = Utc::now();
    match window::first_in_progress(&batches, now) {
        Some(batch) => Ok(HttpResponse::Ok().json(batch)),
        None => Err(GatewayError::not_found(format!(
            "no batch in progress for {}",
            email
        ))),
    }
}

/// Every currently running batch for a trainer
/// GET /api/v2/Batch/allinprogress/{email}
pub async fn get_all_batches_in_progress(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let email = path.into_inner();
    let batches = batches_for_trainer(&data, &email).await?;

    let now = Utc::now();
    listing_response(window::in_progress(batches, now), "in-progress")
}

/// A single batch by id
/// GET /api/v2/Batch/byid/{batch_id}
pub async fn get_batch_by_id(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let batch_id = path.into_inner();
    debug!("Batch lookup by id {}", batch_id);

    match data.batches.get_batch_by_id(batch_id).await? {
        Some(batch) => Ok(HttpResponse::Ok().json(batch)),
        None => Err(GatewayError::not_found(format!(
            "no batch with id {}",
            batch_id
        ))),
    }
}

/// Create a new batch or update an existing one
/// POST /api/v2/Batch/updatebatch
pub async fn update_batch(
    data: web::Data<AppState>,
    payload: web::Json<Batch>,
) -> Result<HttpResponse> {
    let batch = payload.into_inner();
    info!("Batch write requested: {:?} ({})", batch.id, batch.name);

    let stored = data
        .batches
        .add_or_update_batch(batch)
        .await?
        .ok_or_else(|| GatewayError::bad_request("batch was not accepted by the store"))?;

    Ok(HttpResponse::Accepted().json(stored))
}

/// All batch types
/// GET /api/v2/Batch/batchtypes
pub async fn get_all_batch_types(data: web::Data<AppState>) -> Result<HttpResponse> {
    let types = data.batches.get_all_batch_types().await?;
    if types.is_empty() {
        return Err(GatewayError::not_found("no batch types recorded"));
    }
    Ok(HttpResponse::Ok().json(types))
}

/// Every batch running right now, regardless of trainer
/// GET /api/v2/Batch/currentbatches
pub async fn get_current_batches(data: web::Data<AppState>) -> Result<HttpResponse> {
    let batches = data.batches.current_batches().await?;
    listing_response(batches, "current")
}

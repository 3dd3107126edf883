//! Search history endpoint handlers.

use crate::{
    error::ApiError,
    models::{ApiEnvelope, ClearedHistory, HistoryEntry, HistoryPage, HistoryQuery, NewHistoryEntry, PageRequest},
    services::{AppMetrics, HistoryStore, rate_limit::rate_limit_middleware},
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

fn store(req: &HttpRequest) -> Result<&web::Data<HistoryStore>, ApiError> {
    req.app_data::<web::Data<HistoryStore>>()
        .ok_or_else(|| ApiError::Server("History store is not configured".to_string()))
}

fn publish_size(req: &HttpRequest, store: &HistoryStore) {
    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        metrics.set_history_size(store.len());
    }
}

/// List history, newest first
#[api_v2_operation(
    summary = "List Search History",
    description = "Returns a page of recorded lookups ordered newest first. limit defaults to 20 (max 100); offset defaults to 0.",
    tags("History"),
    responses(
        (status = 200, description = "Successful response", body = ApiEnvelope<HistoryPage>),
        (status = 429, description = "Too Many Requests")
    )
)]
pub async fn list_history(
    req: HttpRequest,
    query: web::Query<HistoryQuery>,
) -> Result<web::Json<ApiEnvelope<HistoryPage>>, Error> {
    rate_limit_middleware(&req)?;

    let page = PageRequest::from_query(query.limit.as_deref(), query.offset.as_deref());
    let page = store(&req)?.list(page);

    Ok(web::Json(ApiEnvelope::ok(page)))
}

/// Record a lookup
///
/// The oldest entry is evicted once the log is at capacity.
#[api_v2_operation(
    summary = "Add History Entry",
    description = "Records a weather lookup. city, temperature, and condition are required.",
    tags("History"),
    responses(
        (status = 201, description = "Entry created", body = ApiEnvelope<HistoryEntry>),
        (status = 400, description = "Validation Error or Invalid JSON"),
        (status = 429, description = "Too Many Requests")
    )
)]
pub async fn add_history(
    req: HttpRequest,
    body: web::Json<NewHistoryEntry>,
) -> Result<HttpResponse, Error> {
    rate_limit_middleware(&req)?;

    let store = store(&req)?;
    let entry = store.append(body.into_inner()).map_err(ApiError::from)?;
    publish_size(&req, store);

    tracing::info!(id = %entry.id, city = %entry.city, "History entry added");

    Ok(HttpResponse::Created().json(ApiEnvelope::ok_with_message(entry, "Added to history")))
}

/// Delete one entry by id
#[api_v2_operation(
    summary = "Delete History Entry",
    description = "Removes the entry with the given id and returns it.",
    tags("History"),
    responses(
        (status = 200, description = "Entry deleted", body = ApiEnvelope<HistoryEntry>),
        (status = 404, description = "Not Found - History entry not found"),
        (status = 429, description = "Too Many Requests")
    )
)]
pub async fn delete_history_entry(
    req: HttpRequest,
    id: web::Path<String>,
) -> Result<web::Json<ApiEnvelope<HistoryEntry>>, Error> {
    rate_limit_middleware(&req)?;

    let store = store(&req)?;
    let entry = store.remove_by_id(&id).map_err(ApiError::from)?;
    publish_size(&req, store);

    tracing::info!(id = %entry.id, "History entry deleted");

    Ok(web::Json(ApiEnvelope::ok_with_message(entry, "Deleted from history")))
}

/// Remove every entry
#[api_v2_operation(
    summary = "Clear History",
    description = "Removes all entries and reports how many were deleted.",
    tags("History"),
    responses(
        (status = 200, description = "History cleared", body = ApiEnvelope<ClearedHistory>),
        (status = 429, description = "Too Many Requests")
    )
)]
pub async fn clear_history(
    req: HttpRequest,
) -> Result<web::Json<ApiEnvelope<ClearedHistory>>, Error> {
    rate_limit_middleware(&req)?;

    let store = store(&req)?;
    let deleted_count = store.clear();
    publish_size(&req, store);

    tracing::info!(deleted_count, "History cleared");

    Ok(web::Json(ApiEnvelope::ok_with_message(
        ClearedHistory { deleted_count },
        "Cleared all history",
    )))
}

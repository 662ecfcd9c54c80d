use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::logic::aggregation;
use crate::model::{
    Establishment, Id, NewEstablishment, NewQuotation, Quotation, QuotationFilter,
    QuotationSummary,
};
use crate::store::traits::{EstablishmentStore, QuotationStore, Store};

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Confirmation returned by the delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Path ids that are not numbers cannot match any record
fn parse_id(raw: &str) -> Option<Id> {
    raw.trim().parse().ok()
}

// ========== Establishments ==========

pub async fn list_establishments<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Establishment>>, ApiError> {
    let establishments = store
        .list_establishments()
        .await
        .map_err(|e| ApiError::from_repo(e, "Failed to fetch establishments."))?;

    log::debug!("Listing {} establishments", establishments.len());
    Ok(Json(establishments))
}

pub async fn create_establishment<S: Store>(
    State(store): State<AppState<S>>,
    payload: Result<Json<NewEstablishment>, JsonRejection>,
) -> Result<(StatusCode, Json<Establishment>), ApiError> {
    let Json(new_establishment) = payload?;

    let establishment = store
        .create_establishment(new_establishment)
        .await
        .map_err(|e| ApiError::from_repo(e, "Failed to add establishment."))?;

    log::info!(
        "Created establishment {} ({})",
        establishment.id,
        establishment.name
    );
    Ok((StatusCode::CREATED, Json(establishment)))
}

pub async fn delete_establishment<S: Store>(
    State(store): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(ApiError::NotFound("Establishment not found.".to_string()));
    };

    let removed = store
        .delete_establishment(id)
        .await
        .map_err(|e| ApiError::from_repo(e, "Failed to remove establishment."))?;

    // Quotations that named this establishment keep the name as is
    log::info!("Removed establishment {} ({})", removed.id, removed.name);
    Ok(Json(MessageResponse::new(
        "Establishment removed successfully.",
    )))
}

// ========== Quotations ==========

pub async fn list_quotations<S: Store>(
    State(store): State<AppState<S>>,
    query: Result<Query<QuotationFilter>, QueryRejection>,
) -> Result<Json<Vec<Quotation>>, ApiError> {
    let Query(filter) = query?;

    let quotations = store
        .list_quotations(filter)
        .await
        .map_err(|e| ApiError::from_repo(e, "Failed to fetch quotations."))?;

    log::debug!("Listing {} quotations", quotations.len());
    Ok(Json(quotations))
}

pub async fn create_quotation<S: Store>(
    State(store): State<AppState<S>>,
    payload: Result<Json<NewQuotation>, JsonRejection>,
) -> Result<(StatusCode, Json<Quotation>), ApiError> {
    let Json(new_quotation) = payload?;

    let quotation = store
        .create_quotation(new_quotation)
        .await
        .map_err(|e| ApiError::from_repo(e, "Failed to add quotation."))?;

    log::info!(
        "Created quotation {} ({} at {} on {})",
        quotation.id,
        quotation.feed_name,
        quotation.establishment_name,
        quotation.date
    );
    Ok((StatusCode::CREATED, Json(quotation)))
}

pub async fn delete_quotation<S: Store>(
    State(store): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Some(id) = parse_id(&raw_id) else {
        return Err(ApiError::NotFound("Quotation not found.".to_string()));
    };

    let removed = store
        .delete_quotation(id)
        .await
        .map_err(|e| ApiError::from_repo(e, "Failed to remove quotation."))?;

    log::info!("Removed quotation {}", removed.id);
    Ok(Json(MessageResponse::new("Quotation removed successfully.")))
}

/// Chart series over every quotation, ignoring any table filter
pub async fn quotation_summary<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<QuotationSummary>, ApiError> {
    let quotations = store
        .list_quotations(QuotationFilter::default())
        .await
        .map_err(|e| ApiError::from_repo(e, "Failed to summarize quotations."))?;

    Ok(Json(aggregation::summarize(&quotations)))
}

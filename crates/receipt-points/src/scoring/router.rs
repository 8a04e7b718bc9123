use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use super::domain::{Receipt, ReceiptId};
use super::repository::PointsRepository;
use super::service::{ReceiptScoringService, ReceiptServiceError};

/// Response payload for a processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Router builder exposing the receipt processing endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptScoringService<R>>) -> Router
where
    R: PointsRepository + 'static,
{
    Router::new()
        .route("/api/v1/receipts/process", post(process_handler::<R>))
        .route("/api/v1/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptScoringService<R>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, ReceiptServiceError>
where
    R: PointsRepository + 'static,
{
    let Json(receipt) = payload.map_err(|_| ReceiptServiceError::MalformedPayload)?;
    let id = service.process(&receipt)?;
    Ok(Json(ProcessReceiptResponse { id }))
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptScoringService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<u64>, ReceiptServiceError>
where
    R: PointsRepository + 'static,
{
    let points = service.get_points(&ReceiptId(id))?;
    Ok(Json(points))
}

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::debug;

use super::domain::{Receipt, ReceiptId};
use super::repository::{PointsRepository, RepositoryError};
use super::rules::{standard_rules, ScoringRule};
use super::validation;

/// Service folding the scoring rules over validated receipts and delegating
/// storage to the repository boundary.
pub struct ReceiptScoringService<R> {
    repository: Arc<R>,
    rules: Vec<ScoringRule>,
}

impl<R> ReceiptScoringService<R>
where
    R: PointsRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_rules(repository, standard_rules())
    }

    /// Build a service with an explicit rule pipeline, for callers that need
    /// a reduced or reordered rule set.
    pub fn with_rules(repository: Arc<R>, rules: Vec<ScoringRule>) -> Self {
        Self { repository, rules }
    }

    /// Validate and score a receipt, returning the identifier its total was
    /// stored under. Totals saturate at `u64::MAX` instead of wrapping.
    pub fn process(&self, receipt: &Receipt) -> Result<ReceiptId, ReceiptServiceError> {
        if !validation::is_valid(receipt) {
            return Err(ReceiptServiceError::InvalidReceipt);
        }

        let total = self
            .rules
            .iter()
            .map(|rule| rule(receipt))
            .fold(0u64, u64::saturating_add);
        debug!(points = total, retailer = %receipt.retailer, "scored receipt");

        let id = self.repository.save(total)?;
        Ok(id)
    }

    /// Look up the stored total for a previously processed receipt.
    pub fn get_points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        self.repository
            .get(id)?
            .ok_or(ReceiptServiceError::ReceiptNotFound)
    }
}

/// Error raised by the receipt scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    /// The request body could not be decoded into a receipt at all.
    #[error("The receipt is invalid.")]
    MalformedPayload,
    /// The receipt decoded but failed validation.
    #[error("The receipt is invalid.")]
    InvalidReceipt,
    #[error("No receipt found for that ID.")]
    ReceiptNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ReceiptServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ReceiptServiceError::MalformedPayload | ReceiptServiceError::InvalidReceipt => {
                StatusCode::BAD_REQUEST
            }
            ReceiptServiceError::ReceiptNotFound => StatusCode::NOT_FOUND,
            ReceiptServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

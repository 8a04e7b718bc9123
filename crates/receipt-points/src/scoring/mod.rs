//! Receipt intake, validation, and points scoring.
//!
//! A submitted receipt is checked all-or-nothing by the validator, folded
//! through an ordered set of independent scoring rules, and the resulting
//! total is stored behind the [`PointsRepository`] boundary under a
//! generated identifier. The router exposes the pipeline over HTTP.

pub mod domain;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Receipt, ReceiptId, ReceiptItem};
pub use repository::{PointsRepository, RepositoryError};
pub use router::{receipt_router, ProcessReceiptResponse};
pub use rules::{standard_rules, ScoringRule};
pub use service::{ReceiptScoringService, ReceiptServiceError};
pub use validation::is_valid;

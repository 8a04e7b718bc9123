use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{Receipt, ReceiptId, ReceiptItem};
use crate::scoring::repository::{PointsRepository, RepositoryError};
use crate::scoring::{receipt_router, ReceiptScoringService};

pub(super) fn item(short_description: &str, price: &str) -> ReceiptItem {
    ReceiptItem {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

/// Corner-market fixture worth 109 points under the standard rules.
pub(super) fn receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

/// Five-item fixture worth 28 points under the standard rules.
pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn build_service() -> (
    ReceiptScoringService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReceiptScoringService::new(repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    scores: Arc<Mutex<HashMap<ReceiptId, u64>>>,
    sequence: Arc<AtomicU64>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &ReceiptId) -> Option<u64> {
        self.scores
            .lock()
            .expect("repository mutex poisoned")
            .get(id)
            .copied()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.scores
            .lock()
            .expect("repository mutex poisoned")
            .is_empty()
    }
}

impl PointsRepository for MemoryRepository {
    fn save(&self, points: u64) -> Result<ReceiptId, RepositoryError> {
        let id = ReceiptId(format!(
            "receipt-{:06}",
            self.sequence.fetch_add(1, Ordering::Relaxed)
        ));
        self.scores
            .lock()
            .expect("repository mutex poisoned")
            .insert(id.clone(), points);
        Ok(id)
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<u64>, RepositoryError> {
        let guard = self.scores.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).copied())
    }
}

pub(super) struct UnavailableRepository;

impl PointsRepository for UnavailableRepository {
    fn save(&self, _points: u64) -> Result<ReceiptId, RepositoryError> {
        Err(RepositoryError::Unavailable("points store offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<Option<u64>, RepositoryError> {
        Err(RepositoryError::Unavailable("points store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn receipt_router_with_service(
    service: ReceiptScoringService<MemoryRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

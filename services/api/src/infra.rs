use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::scoring::{PointsRepository, ReceiptId, RepositoryError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPointsRepository {
    scores: Arc<Mutex<HashMap<ReceiptId, u64>>>,
}

impl PointsRepository for InMemoryPointsRepository {
    fn save(&self, points: u64) -> Result<ReceiptId, RepositoryError> {
        let id = ReceiptId(Uuid::new_v4().to_string());
        let mut guard = self.scores.lock().expect("points store mutex poisoned");
        guard.insert(id.clone(), points);
        Ok(id)
    }

    fn get(&self, id: &ReceiptId) -> Result<Option<u64>, RepositoryError> {
        let guard = self.scores.lock().expect("points store mutex poisoned");
        Ok(guard.get(id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_assigns_unique_identifiers() {
        let repository = InMemoryPointsRepository::default();

        let first = repository.save(28).expect("first save succeeds");
        let second = repository.save(28).expect("second save succeeds");

        assert_ne!(first, second);
        assert_eq!(repository.get(&first).expect("lookup succeeds"), Some(28));
        assert_eq!(repository.get(&second).expect("lookup succeeds"), Some(28));
    }

    #[test]
    fn get_returns_none_for_unknown_identifiers() {
        let repository = InMemoryPointsRepository::default();
        let unknown = ReceiptId("missing".to_string());
        assert_eq!(repository.get(&unknown).expect("lookup succeeds"), None);
    }
}

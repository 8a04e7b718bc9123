use super::domain::ReceiptId;

/// Storage boundary for computed point totals.
///
/// Implementations assign the identifier at save time; callers never pick
/// keys.
pub trait PointsRepository: Send + Sync {
    fn save(&self, points: u64) -> Result<ReceiptId, RepositoryError>;
    fn get(&self, id: &ReceiptId) -> Result<Option<u64>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("points store unavailable: {0}")]
    Unavailable(String),
}

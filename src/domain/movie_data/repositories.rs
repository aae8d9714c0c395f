use super::MovieDataset;
use crate::domain::errors::AppError;

/// Source of the chart's records.
///
/// Any error is fatal to chart start-up; implementations do not retry.
#[allow(async_fn_in_trait)]
pub trait MovieDataRepository {
    async fn load_dataset(&self) -> Result<MovieDataset, AppError>;

    /// Human-readable origin for log lines, e.g. the URL.
    fn describe(&self) -> String;
}

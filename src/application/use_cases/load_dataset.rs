use crate::domain::{
    errors::LoadResult,
    logging::LogComponent,
    movie_data::{MovieDataRepository, MovieDataset},
};

/// Use Case: fetch the records once at start-up.
pub struct LoadDatasetUseCase<R: MovieDataRepository> {
    repository: R,
}

impl<R: MovieDataRepository> LoadDatasetUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> LoadResult<MovieDataset> {
        let source = self.repository.describe();
        crate::log_info!(
            LogComponent::Application("LoadDataset"),
            "Loading movie data from {}",
            source
        );

        match self.repository.load_dataset().await {
            Ok(dataset) => {
                crate::log_info!(
                    LogComponent::Application("LoadDataset"),
                    "Loaded {} records from {}",
                    dataset.len(),
                    source
                );
                Ok(dataset)
            }
            Err(e) => {
                crate::log_error!(
                    LogComponent::Application("LoadDataset"),
                    "Failed to load {}: {}",
                    source,
                    e
                );
                Err(e)
            }
        }
    }
}

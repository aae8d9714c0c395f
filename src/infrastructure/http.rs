use gloo::net::http::Request;

use super::csv_loader::parse_movie_csv;
use crate::domain::{
    errors::AppError,
    logging::LogComponent,
    movie_data::{MovieDataRepository, MovieDataset},
};

/// Fetches the movie CSV over HTTP.
#[derive(Clone, Debug)]
pub struct HttpMovieRepository {
    url: String,
}

impl HttpMovieRepository {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MovieDataRepository for HttpMovieRepository {
    async fn load_dataset(&self) -> Result<MovieDataset, AppError> {
        crate::log_debug!(
            LogComponent::Infrastructure("HttpMovieRepository"),
            "GET {}",
            self.url
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::DataLoad(format!("Failed to send request: {:?}", e)))?;

        if !response.ok() {
            return Err(AppError::DataLoad(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::DataLoad(format!("Failed to read body: {:?}", e)))?;

        parse_movie_csv(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Application error. Every fallible path in the crate funnels into one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Dataset could not be fetched (network, HTTP status, body read).
    DataLoad(String),
    /// Dataset was fetched but is not readable CSV.
    Parse(String),
    /// Input violates a precondition: empty dataset, bad config.
    Validation(String),
    /// The chart could not be mounted into the page.
    Rendering(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DataLoad(msg) => write!(f, "Data Load Error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Rendering(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type LoadResult<T> = Result<T, AppError>;

pub mod csv_loader;
pub mod http;
pub mod rendering;
pub mod services;

pub use csv_loader::{coerce_number, parse_movie_csv};
pub use http::HttpMovieRepository;
pub use services::{BrowserTimeProvider, ConsoleLogger, now_ms};

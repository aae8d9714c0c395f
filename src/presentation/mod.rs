pub mod wasm_api;

pub use wasm_api::{mount_movie_chart, start_chart};

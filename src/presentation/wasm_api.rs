use js_sys::Promise;
use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::future_to_promise;

use crate::app::App;
use crate::application::use_cases::LoadDatasetUseCase;
use crate::config::ChartConfig;
use crate::domain::{
    errors::AppError,
    logging::LogComponent,
};
use crate::infrastructure::HttpMovieRepository;

/// WASM entry point for the page.
///
/// Resolves with the number of plotted records; rejects with the error text
/// when the config, the container or the data is unusable. Nothing is
/// mounted on failure.
#[wasm_bindgen(js_name = mountMovieChart)]
pub fn mount_movie_chart(config_json: Option<String>) -> Promise {
    future_to_promise(async move {
        match start_chart(config_json).await {
            Ok(count) => Ok(JsValue::from_f64(count as f64)),
            Err(e) => {
                crate::log_error!(
                    LogComponent::Presentation("WasmApi"),
                    "Chart start-up failed: {}",
                    e
                );
                Err(to_js_error(&e))
            }
        }
    })
}

pub async fn start_chart(config_json: Option<String>) -> Result<usize, AppError> {
    let config = match config_json.as_deref() {
        Some(json) => ChartConfig::from_json(json)?,
        None => ChartConfig::default(),
    };

    let container = find_container(&config.container_selector)?;

    let repository = HttpMovieRepository::new(config.data_url.clone());
    let dataset = LoadDatasetUseCase::new(repository).execute().await?;
    let count = dataset.len();

    mount_to(container, move || view! { <App dataset=dataset config=config /> });

    crate::log_info!(
        LogComponent::Presentation("WasmApi"),
        "Chart mounted with {} records",
        count
    );
    Ok(count)
}

fn find_container(selector: &str) -> Result<web_sys::HtmlElement, AppError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::Rendering("Document not available".to_string()))?;

    document
        .query_selector(selector)
        .map_err(|e| AppError::Rendering(format!("Invalid selector '{}': {:?}", selector, e)))?
        .ok_or_else(|| AppError::Rendering(format!("Container '{}' not found", selector)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| AppError::Rendering(format!("Container '{}' is not an HTML element", selector)))
}

fn to_js_error(error: &AppError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

use crate::error::PredictError;
use crate::models::predict_types::{
    DisplayPrediction, PredictionReport, PredictionRequest, ServerStatus,
};
use crate::services::config_service;
use crate::services::predictor::normalize::{format_probability, normalize_predictions};
use crate::services::predictor::PredictorState;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;

/// Opens the native file dialog filtered to images. `None` when the user
/// cancels or the dialog cannot be shown.
#[tauri::command]
pub async fn pick_image(app: AppHandle) -> Option<String> {
    let picked = tokio::task::spawn_blocking(move || {
        app.dialog()
            .file()
            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "gif", "webp"])
            .blocking_pick_file()
    })
    .await;

    match picked {
        Ok(file) => file.map(|f| f.to_string()),
        Err(e) => {
            log::error!("file dialog task failed: {}", e);
            None
        }
    }
}

/// Initial value for the editable server URL field.
#[tauri::command]
pub fn default_server_url() -> String {
    config_service::default_server_url()
}

#[tauri::command]
pub async fn check_server(
    state: State<'_, PredictorState>,
    server_url: String,
) -> Result<ServerStatus, PredictError> {
    state.uploader().check(&server_url).await
}

/// One full prediction cycle: upload the image, normalize the response,
/// format the probabilities. A second trigger while a request is
/// outstanding fails with `RequestInFlight`; the slot frees itself on every
/// exit path.
#[tauri::command]
pub async fn predict_image(
    state: State<'_, PredictorState>,
    image_path: String,
    server_url: String,
) -> Result<PredictionReport, PredictError> {
    let request = PredictionRequest::new(image_path, server_url)?;
    let _guard = state.begin_request()?;

    let body = state.uploader().predict(&request).await?;
    let entries = normalize_predictions(&body);
    log::info!("prediction returned {} classes", entries.len());

    let predictions = entries
        .into_iter()
        .map(|entry| DisplayPrediction {
            percent: format_probability(entry.probability),
            label: entry.label,
            probability: entry.probability,
        })
        .collect();

    Ok(PredictionReport { predictions })
}

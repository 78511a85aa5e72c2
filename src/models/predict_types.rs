use crate::error::PredictError;
use serde::Serialize;

/// One user-initiated prediction attempt. Built once, sent once, discarded.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub image_path: String,
    pub server_url: String,
}

impl PredictionRequest {
    pub fn new(image_path: String, server_url: String) -> Result<Self, PredictError> {
        if image_path.trim().is_empty() {
            return Err(PredictError::NoImageSelected);
        }
        let server_url = server_url.trim().to_string();
        if server_url.is_empty() {
            return Err(PredictError::InvalidServerUrl("server URL is empty".to_string()));
        }
        Ok(Self {
            image_path,
            server_url,
        })
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PredictionEntry {
    pub label: String,
    pub probability: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct DisplayPrediction {
    pub label: String,
    pub probability: f64,
    pub percent: String,
}

/// What `predict_image` hands back to the frontend: normalized entries with
/// their percent strings preformatted. An empty list is a valid result.
#[derive(Debug, Serialize, Clone)]
pub struct PredictionReport {
    pub predictions: Vec<DisplayPrediction>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ServerStatus {
    pub reachable: bool,
    pub status: Option<u16>,
}

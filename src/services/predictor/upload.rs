use crate::error::PredictError;
use crate::models::predict_types::{PredictionRequest, ServerStatus};
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use std::path::Path;

const PREDICT_PATH: &str = "/predict";
const FILE_FIELD: &str = "file";

// The inference server is usually exposed through an ngrok tunnel; this
// header skips the interstitial browser warning page.
const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";
const NGROK_SKIP_VALUE: &str = "8000";

/// Thin wrapper around a shared `reqwest::Client`. One invocation makes
/// exactly one outbound call: no retries, no explicit timeout beyond the
/// transport default (deliberate single-attempt policy).
pub struct UploadClient {
    http: reqwest::Client,
}

impl UploadClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Uploads the request's image as a multipart POST to `{base}/predict`
    /// and returns the decoded JSON body. Shape tolerance is the
    /// normalizer's job; this only guarantees the body parsed as JSON.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<serde_json::Value, PredictError> {
        let endpoint = endpoint_url(&request.server_url, PREDICT_PATH)?;

        let bytes = tokio::fs::read(&request.image_path)
            .await
            .map_err(|e| {
                log::warn!("failed to read image {}: {}", request.image_path, e);
                PredictError::UnreadableImage(e.to_string())
            })?;

        let file_name = Path::new(&request.image_path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new().part(FILE_FIELD, Part::bytes(bytes).file_name(file_name));

        log::info!("uploading image to {}", endpoint);

        let response = self
            .http
            .post(endpoint)
            .header(NGROK_SKIP_HEADER, NGROK_SKIP_VALUE)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                log::warn!("prediction request failed: {}", e);
                PredictError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.as_u16() != 200 {
            log::warn!("prediction server answered HTTP {}", status);
            return Err(PredictError::Server(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            log::warn!("failed to read response body: {}", e);
            PredictError::Transport(e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            log::warn!("response body is not valid JSON: {}", e);
            PredictError::MalformedResponse(e.to_string())
        })
    }

    /// Reachability probe against the server root (the server exposes a
    /// welcome route there). Transport failure is a `reachable: false`
    /// result rather than an error; only a malformed URL errors.
    pub async fn check(&self, server_url: &str) -> Result<ServerStatus, PredictError> {
        let root = endpoint_url(server_url, "/")?;

        match self
            .http
            .get(root)
            .header(NGROK_SKIP_HEADER, NGROK_SKIP_VALUE)
            .send()
            .await
        {
            Ok(response) => Ok(ServerStatus {
                reachable: response.status().is_success(),
                status: Some(response.status().as_u16()),
            }),
            Err(e) => {
                log::warn!("server check failed: {}", e);
                Ok(ServerStatus {
                    reachable: false,
                    status: None,
                })
            }
        }
    }
}

impl Default for UploadClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds `{base}{path}`, trimming a trailing slash from the base. A parse
/// failure or a non-HTTP scheme fails before any network attempt.
fn endpoint_url(base: &str, path: &str) -> Result<Url, PredictError> {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(PredictError::InvalidServerUrl("server URL is empty".to_string()));
    }

    let url = Url::parse(&format!("{}{}", trimmed, path))
        .map_err(|e| PredictError::InvalidServerUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PredictError::InvalidServerUrl(format!(
            "unsupported scheme '{}'",
            other
        ))),
    }
}

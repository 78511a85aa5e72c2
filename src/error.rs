use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Classified failure for one prediction cycle. Serialized to the frontend
/// as `{ kind, message }`; transport-level detail stays out of the message
/// and is logged where the error is raised.
#[derive(Debug, Clone)]
pub enum PredictError {
    NoImageSelected,
    RequestInFlight,
    InvalidServerUrl(String),
    UnreadableImage(String),
    Transport(String),
    Server(u16),
    MalformedResponse(String),
}

impl PredictError {
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::NoImageSelected => "no_image_selected",
            PredictError::RequestInFlight => "request_in_flight",
            PredictError::InvalidServerUrl(_) => "invalid_server_url",
            PredictError::UnreadableImage(_) => "unreadable_image",
            PredictError::Transport(_) => "transport",
            PredictError::Server(_) => "server",
            PredictError::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::NoImageSelected => write!(f, "No image selected. Pick an image first."),
            PredictError::RequestInFlight => {
                write!(f, "A prediction is already running. Wait for it to finish.")
            }
            PredictError::InvalidServerUrl(detail) => {
                write!(f, "Invalid server URL: {}", detail)
            }
            PredictError::UnreadableImage(detail) => {
                write!(f, "Could not read the selected image: {}", detail)
            }
            PredictError::Transport(_) => {
                write!(f, "Network error. Check the server connection and try again.")
            }
            PredictError::Server(status) => {
                write!(f, "Server error (HTTP {}).", status)
            }
            PredictError::MalformedResponse(_) => {
                write!(f, "The server returned an unreadable response.")
            }
        }
    }
}

impl Serialize for PredictError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PredictError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl From<reqwest::Error> for PredictError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PredictError::MalformedResponse(err.to_string())
        } else {
            PredictError::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for PredictError {
    fn from(err: std::io::Error) -> Self {
        PredictError::UnreadableImage(err.to_string())
    }
}

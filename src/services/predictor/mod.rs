pub mod normalize;
pub mod upload;

use crate::error::PredictError;
use std::sync::atomic::{AtomicBool, Ordering};
use upload::UploadClient;

/// Managed Tauri state for the prediction screen: the shared HTTP client and
/// the single-flight flag that rejects a second trigger while one upload is
/// outstanding.
pub struct PredictorState {
    uploader: UploadClient,
    in_flight: AtomicBool,
}

impl PredictorState {
    pub fn new() -> Self {
        Self {
            uploader: UploadClient::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn uploader(&self) -> &UploadClient {
        &self.uploader
    }

    /// Claims the single request slot. The returned guard releases it on
    /// drop, so every exit path of a prediction frees the slot.
    pub fn begin_request(&self) -> Result<InFlightGuard<'_>, PredictError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_err(|_| PredictError::RequestInFlight)?;
        Ok(InFlightGuard {
            flag: &self.in_flight,
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Relaxed)
    }
}

impl Default for PredictorState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_trigger_rejected_while_in_flight() {
        let state = PredictorState::new();
        let guard = state.begin_request().unwrap();
        assert!(state.is_in_flight());
        assert!(matches!(
            state.begin_request(),
            Err(PredictError::RequestInFlight)
        ));
        drop(guard);
        assert!(!state.is_in_flight());
        assert!(state.begin_request().is_ok());
    }
}

pub mod config_service;
pub mod predictor;

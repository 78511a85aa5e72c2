mod commands;
mod error;
mod models;
mod services;

use services::predictor::PredictorState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .setup(|app| {
            app.manage(PredictorState::new());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::predictor::pick_image,
            commands::predictor::default_server_url,
            commands::predictor::check_server,
            commands::predictor::predict_image,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

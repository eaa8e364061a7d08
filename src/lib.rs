pub mod audit;
mod commands;
pub mod error;
pub mod input;

use commands::*;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env file - try multiple locations
    // During `tauri dev`, CWD is project root; check current dir first
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_path("../.env");
    }

    // Initialize tracing with RUST_LOG env filter
    // Default: warn for most crates, info for our app
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,redpen_lib=info")),
        )
        .init();

    let audit_state = AuditState::from_env();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(audit_state)
        .invoke_handler(tauri::generate_handler![
            // Input commands
            load_input_file,
            paste_input,
            clear_input,
            accepted_extensions,
            // Audit commands
            run_audit,
            has_api_key,
            feedback_report,
            emphasis_spans,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

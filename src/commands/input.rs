//! Input commands
//!
//! Webview-facing surface of the input normalizer. Each command produces a
//! fresh [`InputData`] record; the webview replaces its state wholesale and
//! resets the picker widget so the same file can be reselected.

use crate::input::{InputData, ACCEPTED_EXTENSIONS};
use std::path::Path;

/// Normalize a picked or dropped file into an input record.
#[tauri::command]
pub fn load_input_file(path: String) -> Result<InputData, String> {
    tracing::debug!(path = %path, "Normalizing input file");
    InputData::from_path(Path::new(&path)).map_err(|e| e.to_string())
}

/// Normalize pasted text into an input record.
#[tauri::command]
pub fn paste_input(text: String) -> InputData {
    InputData::pasted(&text)
}

/// The empty sentinel for an explicit clear action.
#[tauri::command]
pub fn clear_input() -> InputData {
    InputData::cleared()
}

/// Extension allow-list for the file-picker dialog. Drag-and-drop is not
/// filtered by this list.
#[tauri::command]
pub fn accepted_extensions() -> Vec<String> {
    ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

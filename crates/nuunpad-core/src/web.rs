//! Browser entry point.

use wasm_bindgen::prelude::*;

use crate::export::export_all_notes;
use crate::sink::BrowserDownloadSink;
use crate::store::LocalStorageNoteStore;

/// Download every note in `localStorage` as `nuunpad-notes-<timestamp>.json`.
#[wasm_bindgen(js_name = exportAllNotes)]
pub fn export_all_notes_js() -> std::result::Result<(), JsError> {
    let store = LocalStorageNoteStore::from_window()?;
    let mut sink = BrowserDownloadSink::from_window()?;
    export_all_notes(&store, &mut sink)?;
    Ok(())
}

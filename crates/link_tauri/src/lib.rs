//! Tauri desktop shell bootstrap for the external-link bridge.
//!
//! This crate keeps command registration localized so the contracts in
//! `link_host` stay decoupled from Tauri internals; the opener core runs here
//! against a host implementation bound to the live app handle.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod external_link;
#[doc(hidden)]
pub mod routing;

/// Starts the Tauri desktop host process.
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            external_link::open_external_browser
        ])
        .run(tauri::generate_context!())
        .expect("link_tauri failed to run Tauri application");
}

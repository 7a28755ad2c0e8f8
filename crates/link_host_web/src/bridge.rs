//! Webview capability bridge for external-link and lifecycle interop.
//!
//! This module preserves a stable API for the adapter layer while `interop`
//! selects the WASM/JS transport or a non-WASM fallback shim.

mod interop;

use link_host::{OpenedResponse, ResumeListener, ResumeSubscription};

/// Invokes the desktop host's `open_external_browser` command.
pub async fn invoke_open_external_browser(url: &str) -> Result<OpenedResponse, String> {
    interop::invoke_open_external_browser(url).await
}

/// Opens `url` through the browser's own window-navigation mechanism.
pub async fn open_window_url(url: &str) -> Result<(), String> {
    interop::open_window_url(url).await
}

/// Registers a foreground-resume listener on the document.
pub fn subscribe_resume(listener: ResumeListener) -> ResumeSubscription {
    interop::subscribe_resume(listener)
}

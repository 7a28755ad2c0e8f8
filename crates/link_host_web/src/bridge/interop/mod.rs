//! Shared transport interop for the webview bridge.
//!
//! Routes calls to target-specific implementations while preserving a uniform
//! API for the bridge module.

use link_host::{OpenedResponse, ResumeListener, ResumeSubscription};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn invoke_open_external_browser(url: &str) -> Result<OpenedResponse, String> {
    imp::invoke_open_external_browser(url).await
}

pub async fn open_window_url(url: &str) -> Result<(), String> {
    imp::open_window_url(url).await
}

pub fn subscribe_resume(listener: ResumeListener) -> ResumeSubscription {
    imp::subscribe_resume(listener)
}

//! Foreground-resume service adapters for browser and desktop-webview
//! contexts.
//!
//! Both contexts observe resume through the document visibility interop: the
//! webview document becomes visible again when the user returns from the
//! external browser.

use link_host::{ResumeListener, ResumeService, ResumeSubscription};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser resume adapter backed by the visibility interop.
pub struct WebResumeService;

impl ResumeService for WebResumeService {
    fn subscribe(&self, listener: ResumeListener) -> ResumeSubscription {
        bridge::subscribe_resume(listener)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Desktop-webview resume adapter backed by the visibility interop.
pub struct TauriResumeService;

impl ResumeService for TauriResumeService {
    fn subscribe(&self, listener: ResumeListener) -> ResumeSubscription {
        bridge::subscribe_resume(listener)
    }
}

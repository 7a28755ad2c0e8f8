//! External-link service adapters for browser and desktop-webview contexts.

use link_host::{ExternalLinkFuture, ExternalLinkService, OpenedResponse};
use url::Url;

use crate::bridge;

/// Resolves a possibly relative link against the configured application base.
///
/// Absolute URLs pass through untouched; relative paths are joined onto
/// `base` (or returned unchanged when no base is configured, leaving the
/// failure to the dispatch layer).
pub fn absolutize_url(base: Option<&str>, url: &str) -> String {
    if Url::parse(url).is_ok() {
        return url.to_string();
    }
    match base {
        Some(base) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            url.trim_start_matches('/')
        ),
        None => url.to_string(),
    }
}

#[derive(Debug, Clone, Default)]
/// Browser external-link adapter backed by window navigation.
///
/// This is the non-embedded fallback path: the URL opens in a new browsing
/// context (or replaces the current document when the host blocks pop-ups).
pub struct WebExternalLinkService {
    base_url: Option<String>,
}

impl WebExternalLinkService {
    /// Sets the application base used to resolve relative links.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl ExternalLinkService for WebExternalLinkService {
    fn open_external_browser<'a>(
        &'a self,
        url: &'a str,
    ) -> ExternalLinkFuture<'a, Result<OpenedResponse, String>> {
        Box::pin(async move {
            let absolute = absolutize_url(self.base_url.as_deref(), url);
            bridge::open_window_url(&absolute).await?;
            Ok(OpenedResponse { success: true })
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Desktop-webview external-link adapter backed by the host command bridge.
pub struct TauriExternalLinkService {
    base_url: Option<String>,
}

impl TauriExternalLinkService {
    /// Sets the application base used to resolve relative links.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl ExternalLinkService for TauriExternalLinkService {
    fn open_external_browser<'a>(
        &'a self,
        url: &'a str,
    ) -> ExternalLinkFuture<'a, Result<OpenedResponse, String>> {
        Box::pin(async move {
            let absolute = absolutize_url(self.base_url.as_deref(), url);
            bridge::invoke_open_external_browser(&absolute).await
        })
    }
}

//! External-link service contract consumed by the embedded web layer.

use std::{future::Future, pin::Pin};

use crate::OpenedResponse;

/// Object-safe boxed future used by [`ExternalLinkService`].
pub type ExternalLinkFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Service the embedded web layer calls to open a URL outside the app shell.
///
/// Concrete adapters route the request either across the host bridge to the
/// native opener or to the browser's own window-navigation mechanism.
pub trait ExternalLinkService {
    /// Requests an external-browser open for `url`.
    fn open_external_browser<'a>(
        &'a self,
        url: &'a str,
    ) -> ExternalLinkFuture<'a, Result<OpenedResponse, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external-link service for unsupported targets.
pub struct NoopExternalLinkService;

impl ExternalLinkService for NoopExternalLinkService {
    fn open_external_browser<'a>(
        &'a self,
        _url: &'a str,
    ) -> ExternalLinkFuture<'a, Result<OpenedResponse, String>> {
        Box::pin(async { Ok(OpenedResponse { success: true }) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_service_resolves_successfully() {
        let service = NoopExternalLinkService;
        let service_obj: &dyn ExternalLinkService = &service;
        let response =
            block_on(service_obj.open_external_browser("https://example.com")).expect("open");
        assert!(response.success);
    }
}

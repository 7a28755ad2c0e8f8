//! Pure handler-routing decisions for desktop URL opening.

use link_host::RegisteredHandler;

/// Identifier reported for the embedded webview engine.
pub const EMBEDDED_WEBVIEW_HANDLER: &str = "embedded-webview";

/// Decides which registered handlers exist for a URL on a desktop host.
///
/// Desktop hosts expose no queryable intent registry; the embedded webview
/// engine is the sole in-app handler and only renders web-browsable schemes.
/// Everything else reports no handlers and therefore routes to the OS default
/// handler.
#[derive(Debug, Clone)]
pub struct SchemeRouter {
    browsable: Vec<&'static str>,
}

impl Default for SchemeRouter {
    fn default() -> Self {
        Self {
            browsable: vec!["http", "https"],
        }
    }
}

impl SchemeRouter {
    /// Returns the handlers registered for `url`.
    pub fn handlers_for(&self, url: &str) -> Vec<RegisteredHandler> {
        match url.split_once(':') {
            Some((scheme, _))
                if self
                    .browsable
                    .iter()
                    .any(|browsable| scheme.eq_ignore_ascii_case(browsable)) =>
            {
                vec![RegisteredHandler::new(EMBEDDED_WEBVIEW_HANDLER)]
            }
            _ => Vec::new(),
        }
    }
}

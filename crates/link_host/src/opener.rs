//! External link opening over an injected host capability.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::{BrowserHost, InAppSurfaceConfig, LinkRequest, OpenError};

/// Which host path carried a successful open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRoute {
    /// The URL launched inside the host-managed in-app browsing surface.
    InAppSurface,
    /// The URL was handed to the host's default-handler dispatch.
    GenericDispatch,
}

/// Successful open outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opened {
    /// Path the launch took.
    pub route: LaunchRoute,
}

/// Bridge success payload returned to the embedded web layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenedResponse {
    /// Always `true` on the success path.
    pub success: bool,
}

impl From<Opened> for OpenedResponse {
    fn from(_: Opened) -> Self {
        Self { success: true }
    }
}

/// Opens caller-supplied URLs in an external browsing surface.
///
/// Each call is independent and stateless: the handler registry is re-queried
/// per invocation and concurrent calls are not coordinated, so two rapid
/// invocations may launch two surfaces. Once the host accepts a launch,
/// control passes to the host's own browsing implementation and the opener
/// retains nothing.
pub struct ExternalLinkOpener {
    host: Rc<dyn BrowserHost>,
    surface: InAppSurfaceConfig,
}

impl ExternalLinkOpener {
    /// Creates an opener over `host` with the default surface configuration.
    pub fn new(host: Rc<dyn BrowserHost>) -> Self {
        Self {
            host,
            surface: InAppSurfaceConfig::default(),
        }
    }

    /// Replaces the in-app surface configuration.
    pub fn with_surface_config(mut self, surface: InAppSurfaceConfig) -> Self {
        self.surface = surface;
        self
    }

    /// Opens `raw_url` in an external browsing surface.
    ///
    /// Prefers the host's in-app browsing surface when at least one handler is
    /// registered for the URL, and falls back to generic dispatch otherwise.
    /// The URL reaches the host exactly as supplied.
    ///
    /// # Errors
    ///
    /// - [`OpenError::InvalidArgument`] for empty or unparseable input.
    /// - [`OpenError::HostUnavailable`] when no foreground surface exists.
    /// - [`OpenError::LaunchFailed`] when the host rejects the registry query,
    ///   the dispatch, or the surface launch.
    pub fn open(&self, raw_url: &str) -> Result<Opened, OpenError> {
        let request = LinkRequest::parse(raw_url)?;
        let ctx = self
            .host
            .foreground_context()
            .ok_or(OpenError::HostUnavailable)?;

        let handlers = self
            .host
            .query_handlers(&ctx, request.as_str())
            .map_err(OpenError::LaunchFailed)?;

        let route = if handlers.is_empty() {
            self.host
                .generic_dispatch(&ctx, request.as_str())
                .map_err(OpenError::LaunchFailed)?;
            LaunchRoute::GenericDispatch
        } else {
            self.host
                .launch_in_app_browser(&ctx, request.as_str(), &self.surface)
                .map_err(OpenError::LaunchFailed)?;
            LaunchRoute::InAppSurface
        };

        Ok(Opened { route })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{ColorScheme, HostCall, RecordingBrowserHost};

    use super::*;

    fn opener_over(host: &RecordingBrowserHost) -> ExternalLinkOpener {
        ExternalLinkOpener::new(Rc::new(host.clone()))
    }

    #[test]
    fn registered_handler_routes_through_in_app_surface() {
        let host = RecordingBrowserHost::default();
        host.set_handlers(&["org.example.browser"]);

        let opened = opener_over(&host)
            .open("https://example.com")
            .expect("open");

        assert_eq!(opened.route, LaunchRoute::InAppSurface);
        assert_eq!(
            host.calls(),
            vec![
                HostCall::Query {
                    url: "https://example.com".to_string()
                },
                HostCall::Launch {
                    url: "https://example.com".to_string(),
                    show_title: true,
                },
            ]
        );
    }

    #[test]
    fn empty_registry_falls_back_to_generic_dispatch() {
        let host = RecordingBrowserHost::default();

        let opened = opener_over(&host)
            .open("customscheme://action")
            .expect("open");

        assert_eq!(opened.route, LaunchRoute::GenericDispatch);
        assert_eq!(
            host.calls(),
            vec![
                HostCall::Query {
                    url: "customscheme://action".to_string()
                },
                HostCall::GenericDispatch {
                    url: "customscheme://action".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_url_fails_before_any_host_call() {
        let host = RecordingBrowserHost::default();

        let err = opener_over(&host).open("").expect_err("empty url");

        assert_eq!(err, OpenError::InvalidArgument);
        assert_eq!(host.calls(), Vec::new());
    }

    #[test]
    fn backgrounded_app_fails_with_host_unavailable() {
        let host = RecordingBrowserHost::default();
        host.set_backgrounded();

        let err = opener_over(&host)
            .open("https://example.com")
            .expect_err("backgrounded");

        assert_eq!(err, OpenError::HostUnavailable);
        assert!(err.is_transient());
        assert_eq!(host.calls(), Vec::new());
    }

    #[test]
    fn host_launch_rejection_is_classified_with_its_diagnostic() {
        let host = RecordingBrowserHost::default();
        host.set_handlers(&["org.example.browser"]);
        host.set_launch_failure("no activity capable of handling the view action");

        let err = opener_over(&host)
            .open("https://example.com")
            .expect_err("launch failure");

        assert_eq!(
            err,
            OpenError::LaunchFailed(
                "no activity capable of handling the view action".to_string()
            )
        );
        assert_eq!(
            err.to_string(),
            "Error opening browser: no activity capable of handling the view action"
        );
    }

    #[test]
    fn registry_query_failure_is_classified_as_launch_failed() {
        let host = RecordingBrowserHost::default();
        host.set_query_failure("registry query rejected");

        let err = opener_over(&host)
            .open("https://example.com")
            .expect_err("query failure");

        assert_eq!(
            err,
            OpenError::LaunchFailed("registry query rejected".to_string())
        );
    }

    #[test]
    fn rapid_successive_opens_launch_independently() {
        let host = RecordingBrowserHost::default();
        host.set_handlers(&["org.example.browser"]);
        let opener = opener_over(&host);

        opener.open("https://example.com/a").expect("first open");
        opener.open("https://example.com/b").expect("second open");

        let launches: Vec<HostCall> = host
            .calls()
            .into_iter()
            .filter(|call| matches!(call, HostCall::Launch { .. }))
            .collect();
        assert_eq!(
            launches,
            vec![
                HostCall::Launch {
                    url: "https://example.com/a".to_string(),
                    show_title: true,
                },
                HostCall::Launch {
                    url: "https://example.com/b".to_string(),
                    show_title: true,
                },
            ]
        );
    }

    #[test]
    fn surface_config_reaches_the_host_launch_call() {
        let host = RecordingBrowserHost::default();
        host.set_handlers(&["org.example.browser"]);

        let opener = opener_over(&host).with_surface_config(InAppSurfaceConfig {
            show_title: false,
            color_scheme: ColorScheme::Dark,
        });
        opener.open("https://example.com").expect("open");

        assert_eq!(
            host.calls(),
            vec![
                HostCall::Query {
                    url: "https://example.com".to_string()
                },
                HostCall::Launch {
                    url: "https://example.com".to_string(),
                    show_title: false,
                },
            ]
        );
    }

    #[test]
    fn success_converts_into_the_bridge_payload() {
        let host = RecordingBrowserHost::default();
        let opened = opener_over(&host)
            .open("https://example.com")
            .expect("open");
        assert_eq!(OpenedResponse::from(opened), OpenedResponse { success: true });
    }
}

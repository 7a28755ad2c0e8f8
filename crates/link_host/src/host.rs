//! Host browsing-capability contracts and in-memory adapters.

use std::{cell::RefCell, rc::Rc};

use crate::surface::InAppSurfaceConfig;

/// Opaque handle naming the host's currently visible application surface.
///
/// Launch calls are only valid while the host keeps this surface in the
/// foreground; the handle carries a stable label for diagnostics and makes no
/// promise beyond the call it was acquired for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForegroundContext {
    label: String,
}

impl ForegroundContext {
    /// Creates a handle labeled after the host surface it represents.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Stable diagnostic label of the underlying surface.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// One application the host reports as registered to view a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredHandler {
    id: String,
}

impl RegisteredHandler {
    /// Creates a handler entry with a stable host-side identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Stable host-side identifier of the handler.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Host capability surface required to open an external browser.
///
/// Implementations bind the opener to a concrete host; the opener owns
/// validation, routing, and error classification, while implementations own
/// the raw host calls and report failures as diagnostic strings.
pub trait BrowserHost {
    /// Returns the currently visible surface, or `None` when the application
    /// is not in the foreground.
    fn foreground_context(&self) -> Option<ForegroundContext>;

    /// Enumerates applications registered to view `url`.
    ///
    /// # Errors
    ///
    /// Returns a host diagnostic when the registry query itself fails.
    fn query_handlers(
        &self,
        ctx: &ForegroundContext,
        url: &str,
    ) -> Result<Vec<RegisteredHandler>, String>;

    /// Routes `url` to whatever the host considers its default handler.
    ///
    /// # Errors
    ///
    /// Returns a host diagnostic when dispatch is rejected.
    fn generic_dispatch(&self, ctx: &ForegroundContext, url: &str) -> Result<(), String>;

    /// Launches `url` inside a short-lived host-managed browsing surface.
    ///
    /// # Errors
    ///
    /// Returns a host diagnostic when the surface cannot be created or the
    /// launch is rejected.
    fn launch_in_app_browser(
        &self,
        ctx: &ForegroundContext,
        url: &str,
        config: &InAppSurfaceConfig,
    ) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op host for targets without any browsing capability.
pub struct NoopBrowserHost;

impl BrowserHost for NoopBrowserHost {
    fn foreground_context(&self) -> Option<ForegroundContext> {
        None
    }

    fn query_handlers(
        &self,
        _ctx: &ForegroundContext,
        _url: &str,
    ) -> Result<Vec<RegisteredHandler>, String> {
        Ok(Vec::new())
    }

    fn generic_dispatch(&self, _ctx: &ForegroundContext, _url: &str) -> Result<(), String> {
        Ok(())
    }

    fn launch_in_app_browser(
        &self,
        _ctx: &ForegroundContext,
        _url: &str,
        _config: &InAppSurfaceConfig,
    ) -> Result<(), String> {
        Ok(())
    }
}

/// One host call observed by [`RecordingBrowserHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// The handler registry was queried for a URL.
    Query {
        /// URL the registry was queried for.
        url: String,
    },
    /// An in-app browsing surface was launched for a URL.
    Launch {
        /// URL the surface was launched with.
        url: String,
        /// Whether the surface was asked to show a title bar.
        show_title: bool,
    },
    /// Generic dispatch was invoked for a URL.
    GenericDispatch {
        /// URL handed to the default-handler dispatch.
        url: String,
    },
}

#[derive(Debug, Default)]
struct RecordingState {
    foreground: Option<String>,
    handlers: Vec<RegisteredHandler>,
    query_failure: Option<String>,
    launch_failure: Option<String>,
    calls: Vec<HostCall>,
}

/// In-memory recording host for opener tests and headless composition.
///
/// Starts foregrounded on a surface labeled `main` with an empty handler
/// registry; tests reconfigure foreground presence, registry contents, and
/// injected failures, then assert on the recorded call log.
#[derive(Debug, Clone)]
pub struct RecordingBrowserHost {
    inner: Rc<RefCell<RecordingState>>,
}

impl Default for RecordingBrowserHost {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RecordingState {
                foreground: Some("main".to_string()),
                ..RecordingState::default()
            })),
        }
    }
}

impl RecordingBrowserHost {
    /// Marks the application as backgrounded; foreground acquisition fails.
    pub fn set_backgrounded(&self) {
        self.inner.borrow_mut().foreground = None;
    }

    /// Marks the application as foregrounded on a surface labeled `label`.
    pub fn set_foreground(&self, label: impl Into<String>) {
        self.inner.borrow_mut().foreground = Some(label.into());
    }

    /// Replaces the handler registry contents reported for every query.
    pub fn set_handlers(&self, ids: &[&str]) {
        self.inner.borrow_mut().handlers =
            ids.iter().map(|id| RegisteredHandler::new(*id)).collect();
    }

    /// Makes every registry query fail with `message`.
    pub fn set_query_failure(&self, message: impl Into<String>) {
        self.inner.borrow_mut().query_failure = Some(message.into());
    }

    /// Makes every launch and dispatch call fail with `message`.
    pub fn set_launch_failure(&self, message: impl Into<String>) {
        self.inner.borrow_mut().launch_failure = Some(message.into());
    }

    /// Returns the host calls recorded so far, in invocation order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.inner.borrow().calls.clone()
    }
}

impl BrowserHost for RecordingBrowserHost {
    fn foreground_context(&self) -> Option<ForegroundContext> {
        self.inner
            .borrow()
            .foreground
            .as_deref()
            .map(ForegroundContext::new)
    }

    fn query_handlers(
        &self,
        _ctx: &ForegroundContext,
        url: &str,
    ) -> Result<Vec<RegisteredHandler>, String> {
        let mut state = self.inner.borrow_mut();
        state.calls.push(HostCall::Query {
            url: url.to_string(),
        });
        if let Some(message) = state.query_failure.clone() {
            return Err(message);
        }
        Ok(state.handlers.clone())
    }

    fn generic_dispatch(&self, _ctx: &ForegroundContext, url: &str) -> Result<(), String> {
        let mut state = self.inner.borrow_mut();
        state.calls.push(HostCall::GenericDispatch {
            url: url.to_string(),
        });
        match state.launch_failure.clone() {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }

    fn launch_in_app_browser(
        &self,
        _ctx: &ForegroundContext,
        url: &str,
        config: &InAppSurfaceConfig,
    ) -> Result<(), String> {
        let mut state = self.inner.borrow_mut();
        state.calls.push(HostCall::Launch {
            url: url.to_string(),
            show_title: config.show_title,
        });
        match state.launch_failure.clone() {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_host_starts_foregrounded_with_empty_registry() {
        let host = RecordingBrowserHost::default();
        let ctx = host.foreground_context().expect("foreground");
        assert_eq!(ctx.label(), "main");
        assert_eq!(
            host.query_handlers(&ctx, "https://example.com").expect("query"),
            Vec::new()
        );
    }

    #[test]
    fn recording_host_reports_configured_handlers_and_logs_calls() {
        let host = RecordingBrowserHost::default();
        host.set_handlers(&["org.example.browser"]);
        let ctx = host.foreground_context().expect("foreground");

        let handlers = host
            .query_handlers(&ctx, "https://example.com")
            .expect("query");
        assert_eq!(handlers.len(), 1);
        assert_eq!(handlers[0].id(), "org.example.browser");
        assert_eq!(
            host.calls(),
            vec![HostCall::Query {
                url: "https://example.com".to_string()
            }]
        );
    }

    #[test]
    fn backgrounded_host_yields_no_foreground_context() {
        let host = RecordingBrowserHost::default();
        host.set_backgrounded();
        assert!(host.foreground_context().is_none());
    }

    #[test]
    fn noop_host_has_no_foreground_surface() {
        assert!(NoopBrowserHost.foreground_context().is_none());
    }
}

//! External-browser command handlers for desktop host integration.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use link_host::{
    BrowserHost, ColorScheme, ExternalLinkOpener, ForegroundContext, InAppSurfaceConfig,
    OpenedResponse, RegisteredHandler,
};
use tauri::Manager;
use tauri_plugin_opener::OpenerExt;

use crate::routing::SchemeRouter;

/// Sequence for in-app surface window labels; rapid successive opens must
/// each get their own surface.
static SURFACE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Desktop host capability implementation over a live Tauri app handle.
pub(crate) struct TauriBrowserHost {
    app: tauri::AppHandle,
    router: SchemeRouter,
}

impl TauriBrowserHost {
    pub(crate) fn new(app: tauri::AppHandle) -> Self {
        Self {
            app,
            router: SchemeRouter::default(),
        }
    }
}

impl BrowserHost for TauriBrowserHost {
    fn foreground_context(&self) -> Option<ForegroundContext> {
        let windows = self.app.webview_windows();
        let focused = windows
            .iter()
            .find(|(_, window)| window.is_focused().unwrap_or(false))
            .map(|(label, _)| label.clone());
        focused
            .or_else(|| windows.contains_key("main").then(|| "main".to_string()))
            .map(ForegroundContext::new)
    }

    fn query_handlers(
        &self,
        _ctx: &ForegroundContext,
        url: &str,
    ) -> Result<Vec<RegisteredHandler>, String> {
        Ok(self.router.handlers_for(url))
    }

    fn generic_dispatch(&self, _ctx: &ForegroundContext, url: &str) -> Result<(), String> {
        self.app
            .opener()
            .open_url(url, None::<String>)
            .map_err(|err| format!("system URL dispatch failed: {err}"))
    }

    fn launch_in_app_browser(
        &self,
        _ctx: &ForegroundContext,
        url: &str,
        config: &InAppSurfaceConfig,
    ) -> Result<(), String> {
        let external: tauri::Url = url
            .parse()
            .map_err(|err| format!("invalid external URL `{url}`: {err}"))?;
        let theme = match config.color_scheme {
            ColorScheme::Light => Some(tauri::Theme::Light),
            ColorScheme::Dark => Some(tauri::Theme::Dark),
            ColorScheme::System => None,
        };
        let label = format!("external-link-{}", SURFACE_SEQ.fetch_add(1, Ordering::Relaxed));

        // Title-bar visibility maps to window decorations on desktop hosts.
        tauri::WebviewWindowBuilder::new(&self.app, &label, tauri::WebviewUrl::External(external))
            .title(url)
            .decorations(config.show_title)
            .theme(theme)
            .build()
            .map_err(|err| format!("in-app browser window failed: {err}"))?;
        Ok(())
    }
}

/// Opens a URL in an external browsing surface through the desktop host.
///
/// This is the `openExternalBrowser` method exposed to the embedded web
/// layer; failures surface as the bridge message contract. An absent `url`
/// argument fails the same way as an empty one.
#[tauri::command]
pub fn open_external_browser(
    app: tauri::AppHandle,
    url: Option<String>,
) -> Result<OpenedResponse, String> {
    let url = url.unwrap_or_default();
    tracing::debug!(%url, "open_external_browser invoked");
    let opener = ExternalLinkOpener::new(Rc::new(TauriBrowserHost::new(app)));
    match opener.open(&url) {
        Ok(opened) => {
            tracing::debug!(route = ?opened.route, "external browser opened");
            Ok(OpenedResponse::from(opened))
        }
        Err(err) => {
            tracing::warn!(error = %err, "external browser open failed");
            Err(err.to_string())
        }
    }
}

//! Compile-time host-strategy selection and concrete adapter factories.

use link_host::{
    ExternalLinkFuture, ExternalLinkService, NoopExternalLinkService, NoopResumeService,
    OpenedResponse, ResumeListener, ResumeService, ResumeSubscription,
};

use crate::{
    TauriExternalLinkService, TauriResumeService, WebExternalLinkService, WebResumeService,
};

#[cfg(all(feature = "desktop-host-stub", feature = "desktop-host-tauri"))]
compile_error!(
    "features `desktop-host-stub` and `desktop-host-tauri` are mutually exclusive; enable only one"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `link_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters using window navigation.
    Browser,
    /// Desktop adapters routing through the Tauri command transport.
    DesktopTauri,
    /// Desktop placeholder adapters used while native transport is stubbed.
    DesktopStub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-tauri")]
    {
        HostStrategy::DesktopTauri
    }

    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(any(feature = "desktop-host-stub", feature = "desktop-host-tauri")))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::DesktopTauri => "desktop-tauri",
        HostStrategy::DesktopStub => "desktop-stub",
    }
}

/// Adapter enum that erases the concrete external-link backend behind
/// [`ExternalLinkService`].
#[derive(Debug, Clone)]
pub enum ExternalLinkServiceAdapter {
    /// Browser window-navigation backend.
    Browser(WebExternalLinkService),
    /// Native desktop command transport backend.
    DesktopTauri(TauriExternalLinkService),
    /// No-op fallback used when desktop transport is intentionally stubbed.
    DesktopStub(NoopExternalLinkService),
}

impl ExternalLinkService for ExternalLinkServiceAdapter {
    fn open_external_browser<'a>(
        &'a self,
        url: &'a str,
    ) -> ExternalLinkFuture<'a, Result<OpenedResponse, String>> {
        match self {
            Self::Browser(service) => service.open_external_browser(url),
            Self::DesktopTauri(service) => service.open_external_browser(url),
            Self::DesktopStub(service) => service.open_external_browser(url),
        }
    }
}

/// Returns the external-link service for the selected host strategy.
pub fn external_link_service() -> ExternalLinkServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            ExternalLinkServiceAdapter::Browser(WebExternalLinkService::default())
        }
        HostStrategy::DesktopTauri => {
            ExternalLinkServiceAdapter::DesktopTauri(TauriExternalLinkService::default())
        }
        HostStrategy::DesktopStub => {
            ExternalLinkServiceAdapter::DesktopStub(NoopExternalLinkService)
        }
    }
}

/// Adapter enum that erases the concrete resume backend behind
/// [`ResumeService`].
#[derive(Debug, Clone, Copy)]
pub enum ResumeServiceAdapter {
    /// Browser visibility-backed resume events.
    Browser(WebResumeService),
    /// Desktop-webview visibility-backed resume events.
    DesktopTauri(TauriResumeService),
    /// No-op fallback that never fires.
    DesktopStub(NoopResumeService),
}

impl ResumeService for ResumeServiceAdapter {
    fn subscribe(&self, listener: ResumeListener) -> ResumeSubscription {
        match self {
            Self::Browser(service) => service.subscribe(listener),
            Self::DesktopTauri(service) => service.subscribe(listener),
            Self::DesktopStub(service) => service.subscribe(listener),
        }
    }
}

/// Returns the resume service for the selected host strategy.
pub fn resume_service() -> ResumeServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ResumeServiceAdapter::Browser(WebResumeService),
        HostStrategy::DesktopTauri => ResumeServiceAdapter::DesktopTauri(TauriResumeService),
        HostStrategy::DesktopStub => ResumeServiceAdapter::DesktopStub(NoopResumeService),
    }
}

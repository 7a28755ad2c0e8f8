//! Typed host-domain contracts and the external-link opener core.
//!
//! This crate is the API-first boundary for the external-link bridge. It owns
//! the opener algorithm, the classified error taxonomy, and the capability
//! contracts the concrete hosts implement, while browser adapters live in
//! `link_host_web` and desktop transport remains behind `link_tauri`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod host;
pub mod lifecycle;
pub mod opener;
pub mod request;
pub mod service;
pub mod surface;

pub use error::OpenError;
pub use host::{
    BrowserHost, ForegroundContext, HostCall, NoopBrowserHost, RecordingBrowserHost,
    RegisteredHandler,
};
pub use lifecycle::{
    MemoryResumeService, NoopResumeService, ResumeListener, ResumeService, ResumeSubscription,
};
pub use opener::{ExternalLinkOpener, LaunchRoute, Opened, OpenedResponse};
pub use request::LinkRequest;
pub use service::{ExternalLinkFuture, ExternalLinkService, NoopExternalLinkService};
pub use surface::{ColorScheme, InAppSurfaceConfig};

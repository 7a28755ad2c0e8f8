//! Browser (`wasm32`) implementations of [`link_host`] service contracts.
//!
//! This crate is the concrete web-side wiring layer for external-link opening
//! and foreground-resume notification. Adapters route through a `bridge`
//! module whose `interop` layer selects a WASM/JS implementation or a
//! non-WASM fallback shim at compile time.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
mod bridge;
pub mod external_link;
pub mod lifecycle;

pub use adapters::{
    external_link_service, host_strategy_name, resume_service, selected_host_strategy,
    ExternalLinkServiceAdapter, HostStrategy, ResumeServiceAdapter,
};
pub use external_link::{absolutize_url, TauriExternalLinkService, WebExternalLinkService};
pub use lifecycle::{TauriResumeService, WebResumeService};

//! Classified failures for external-browser open attempts.

use thiserror::Error;

/// Classified failure for one external-browser open attempt.
///
/// The display text of each variant is the message contract consumed by the
/// embedded web layer, so hosts map their diagnostics into
/// [`LaunchFailed`](Self::LaunchFailed) rather than inventing new strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenError {
    /// The caller supplied no URL, or one that does not parse as a URI.
    #[error("URL is required")]
    InvalidArgument,
    /// No foreground surface exists to launch from.
    #[error("Activity not found")]
    HostUnavailable,
    /// The host accepted the request but rejected or failed the launch.
    #[error("Error opening browser: {0}")]
    LaunchFailed(String),
}

impl OpenError {
    /// Returns whether the caller may retry after re-establishing foreground
    /// state.
    ///
    /// Only [`HostUnavailable`](Self::HostUnavailable) is transient; argument
    /// and launch failures are terminal for the supplied input.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::HostUnavailable)
    }
}

//! Transient link-request validation.

use url::Url;

use crate::OpenError;

/// A validated link request created from caller input at invocation time.
///
/// The request keeps the URL exactly as supplied so the host receives it
/// unmodified; validation only proves the string parses as a URI before any
/// launch attempt is made. Requests carry no state beyond the URL and are
/// dropped once the attempt completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    raw: String,
}

impl LinkRequest {
    /// Validates caller input into a request.
    ///
    /// # Errors
    ///
    /// Returns [`OpenError::InvalidArgument`] when `raw` is empty or is not a
    /// syntactically parseable URI.
    pub fn parse(raw: &str) -> Result<Self, OpenError> {
        if raw.is_empty() {
            return Err(OpenError::InvalidArgument);
        }
        Url::parse(raw).map_err(|_| OpenError::InvalidArgument)?;
        Ok(Self {
            raw: raw.to_string(),
        })
    }

    /// Returns the URL exactly as the caller supplied it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_input_is_rejected_as_invalid_argument() {
        assert_eq!(LinkRequest::parse(""), Err(OpenError::InvalidArgument));
    }

    #[test]
    fn unparseable_input_is_rejected_as_invalid_argument() {
        assert_eq!(
            LinkRequest::parse("not a url"),
            Err(OpenError::InvalidArgument)
        );
        assert_eq!(
            LinkRequest::parse("/auth/callback"),
            Err(OpenError::InvalidArgument)
        );
    }

    #[test]
    fn parseable_urls_pass_through_unmodified() {
        let https = LinkRequest::parse("https://example.com/login?next=%2Fhome").expect("https");
        assert_eq!(https.as_str(), "https://example.com/login?next=%2Fhome");

        let custom = LinkRequest::parse("customscheme://action").expect("custom scheme");
        assert_eq!(custom.as_str(), "customscheme://action");
    }
}

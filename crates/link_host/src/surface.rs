//! In-app browsing surface configuration.

use serde::{Deserialize, Serialize};

/// Visual scheme requested for the in-app browsing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    /// Force the light theme.
    #[default]
    Light,
    /// Force the dark theme.
    Dark,
    /// Follow the host system preference.
    System,
}

/// Configuration for the short-lived in-app browsing surface.
///
/// The surface itself is owned and secured by the host browser
/// implementation; this struct only carries the presentation options the
/// bridge is allowed to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InAppSurfaceConfig {
    /// Whether the surface shows a title bar.
    pub show_title: bool,
    /// Requested visual scheme.
    pub color_scheme: ColorScheme,
}

impl Default for InAppSurfaceConfig {
    fn default() -> Self {
        Self {
            show_title: true,
            color_scheme: ColorScheme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_surface_shows_title_with_light_scheme() {
        let config = InAppSurfaceConfig::default();
        assert!(config.show_title);
        assert_eq!(config.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn surface_config_uses_bridge_field_naming() {
        let json = serde_json::to_string(&InAppSurfaceConfig::default()).expect("serialize");
        assert_eq!(json, r#"{"showTitle":true,"colorScheme":"light"}"#);

        let parsed: InAppSurfaceConfig =
            serde_json::from_str(r#"{"colorScheme":"system"}"#).expect("partial config");
        assert!(parsed.show_title);
        assert_eq!(parsed.color_scheme, ColorScheme::System);
    }
}

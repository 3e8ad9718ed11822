//! Asset references (stylesheets, images).

use serde::{Deserialize, Serialize};

/// A reference to a static resource shipped alongside the page.
///
/// The path is resolved by the hosting file system or web server, never by
/// this library; `validate::check_bundle` can verify resolution against a
/// staged deployment directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Path as it appears in the emitted markup
    pub path: String,

    /// What kind of resource the path points to
    pub kind: AssetKind,
}

impl AssetRef {
    /// Create a new asset reference.
    pub fn new(path: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Create a stylesheet reference.
    pub fn stylesheet(path: impl Into<String>) -> Self {
        Self::new(path, AssetKind::Stylesheet)
    }

    /// Create an image reference.
    pub fn image(path: impl Into<String>) -> Self {
        Self::new(path, AssetKind::Image)
    }

    /// Check if the path is relative to the deployment bundle.
    ///
    /// Absolute URLs (anything with a scheme) and protocol-relative paths are
    /// resolved by the network, not the bundle.
    pub fn is_relative(&self) -> bool {
        !self.path.starts_with('/')
            && !self.path.starts_with("//")
            && !self.path.contains("://")
    }
}

/// Type of referenced asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// CSS stylesheet
    Stylesheet,
    /// Image
    Image,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Stylesheet => write!(f, "stylesheet"),
            AssetKind::Image => write!(f, "image"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_relative() {
        assert!(AssetRef::stylesheet("doku.css").is_relative());
        assert!(AssetRef::image("docs/title.png").is_relative());
        assert!(!AssetRef::image("http://c.example.com/counter.png").is_relative());
        assert!(!AssetRef::image("/absolute/path.png").is_relative());
    }

    #[test]
    fn test_asset_kind_display() {
        assert_eq!(AssetKind::Stylesheet.to_string(), "stylesheet");
        assert_eq!(AssetKind::Image.to_string(), "image");
    }
}

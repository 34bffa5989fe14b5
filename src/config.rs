//! Options recognized by the pager.
//!
//! Options are set either through the builder methods or by deserializing a
//! TOML table; missing keys fall back to the defaults.
//!
//! ```rust
//! use list_pager::config::PagerConfig;
//!
//! let config = PagerConfig::from_toml_str("length = 5\nmarker = \"> \"").unwrap();
//! assert_eq!(config.length, 5);
//! assert_eq!(config.marker, "> ");
//! assert_eq!((config.x, config.y), (6, 8));
//! ```

use serde::Deserialize;

use crate::error::{PagerError, Result};
use crate::paginator;

/// Render origin, surface size, page length and selection marker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Column offset of the list on the surface.
    pub x: u16,
    /// Row offset of the list on the surface.
    pub y: u16,
    /// Width of the backing surface in columns.
    pub width: u16,
    /// Height of the backing surface in rows.
    pub height: u16,
    /// Number of items per page.
    pub length: usize,
    /// Prefix drawn before the selected item's label.
    pub marker: String,
    /// Page indicator drawn below the items, if any.
    pub pagination: Option<paginator::Type>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            x: 6,
            y: 8,
            width: 100,
            height: 200,
            length: 10,
            marker: "› ".to_string(),
            pagination: None,
        }
    }
}

impl PagerConfig {
    /// Parses a TOML table. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::ConfigParse`] for malformed TOML and
    /// [`PagerError::InvalidConfig`] when the values fail [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| PagerError::ConfigParse {
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the render origin.
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the backing surface size.
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the page length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the selection marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Enables a page indicator below the items.
    pub fn with_pagination(mut self, kind: paginator::Type) -> Self {
        self.pagination = Some(kind);
        self
    }

    /// Checks that the values can drive a pager.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::InvalidConfig`] for a zero page length or a
    /// zero-sized surface.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(PagerError::InvalidConfig {
                details: "length must be at least 1".to_string(),
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(PagerError::InvalidConfig {
                details: format!("surface size {}x{} is empty", self.width, self.height),
            });
        }
        Ok(())
    }
}

//! Catalog configuration
//!
//! Settings that shape lookups but never the table itself. The hop bound
//! caps how far the genus/species resolver walks before giving up and
//! returning the documented default.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default number of species/genus hops the resolver may take
pub const DEFAULT_MAX_HOPS: u8 = 3;

/// Largest hop bound a configuration may request
pub const MAX_HOPS_LIMIT: u8 = 8;

/// Configuration for a [`Catalog`](crate::Catalog)
///
/// # Example
///
/// ```
/// use bestiary_catalog::CatalogConfig;
///
/// let config = CatalogConfig::default();
/// assert_eq!(config.max_inheritance_hops(), 3);
///
/// // Clamped to 1..=8
/// let config = CatalogConfig::default().with_max_inheritance_hops(20);
/// assert_eq!(config.max_inheritance_hops(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// How many species/genus links the resolver may follow
    ///
    /// This value is clamped to `[1, MAX_HOPS_LIMIT]`.
    max_inheritance_hops: u8,

    /// Log a warning when a lookup falls back to the sentinel record
    warn_on_fallback: bool,
}

impl CatalogConfig {
    /// Parse a configuration from RON text, clamping out-of-range values
    ///
    /// ```
    /// use bestiary_catalog::CatalogConfig;
    ///
    /// let config = CatalogConfig::from_ron_str("(max_inheritance_hops: 0)").unwrap();
    /// assert_eq!(config.max_inheritance_hops(), 1);
    /// assert!(config.warn_on_fallback());
    /// ```
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let mut config: CatalogConfig = ron::from_str(content)?;
        config.set_max_inheritance_hops(config.max_inheritance_hops);
        Ok(config)
    }

    /// Set the hop bound, builder style
    pub fn with_max_inheritance_hops(mut self, hops: u8) -> Self {
        self.set_max_inheritance_hops(hops);
        self
    }

    /// Enable or disable fallback warnings, builder style
    pub fn with_fallback_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_fallback = enabled;
        self
    }

    /// Get the hop bound
    pub fn max_inheritance_hops(&self) -> u8 {
        self.max_inheritance_hops
    }

    /// Set the hop bound
    ///
    /// The value is clamped to `[1, MAX_HOPS_LIMIT]`.
    pub fn set_max_inheritance_hops(&mut self, hops: u8) {
        self.max_inheritance_hops = hops.clamp(1, MAX_HOPS_LIMIT);
    }

    /// Check if sentinel fallbacks are logged
    pub fn warn_on_fallback(&self) -> bool {
        self.warn_on_fallback
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_inheritance_hops: DEFAULT_MAX_HOPS,
            warn_on_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.max_inheritance_hops(), DEFAULT_MAX_HOPS);
        assert!(config.warn_on_fallback());
    }

    #[test]
    fn test_hops_clamped() {
        let mut config = CatalogConfig::default();
        config.set_max_inheritance_hops(0);
        assert_eq!(config.max_inheritance_hops(), 1);
        config.set_max_inheritance_hops(200);
        assert_eq!(config.max_inheritance_hops(), MAX_HOPS_LIMIT);
        config.set_max_inheritance_hops(5);
        assert_eq!(config.max_inheritance_hops(), 5);
    }

    #[test]
    fn test_from_ron() {
        let config = CatalogConfig::from_ron_str(
            "(max_inheritance_hops: 2, warn_on_fallback: false)",
        )
        .unwrap();
        assert_eq!(config.max_inheritance_hops(), 2);
        assert!(!config.warn_on_fallback());

        let config = CatalogConfig::from_ron_str("()").unwrap();
        assert_eq!(config, CatalogConfig::default());

        let config = CatalogConfig::from_ron_str("(max_inheritance_hops: 99)").unwrap();
        assert_eq!(config.max_inheritance_hops(), MAX_HOPS_LIMIT);
    }

    #[test]
    fn test_from_ron_rejects_garbage() {
        assert!(CatalogConfig::from_ron_str("(max_inheritance_hops: \"many\")").is_err());
    }
}

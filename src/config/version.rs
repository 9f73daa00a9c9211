//! BigCommerce Management API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Management API to target, and the per-version capability list of
//! available resource families.

use std::fmt;

/// A resource family exposed by the Management API.
///
/// Not every family exists in every API version; use
/// [`ApiVersion::supports`] to check availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceFamily {
    /// Customers and their nested addresses, attributes, and metafields.
    Customers,
    /// Inventory items and their per-location levels.
    Inventories,
    /// Customer segments.
    Segments,
    /// Newsletter subscribers.
    Subscribers,
}

/// BigCommerce Management API version.
///
/// The path of every request embeds the version
/// (`/stores/{store_hash}/v3/...`). The resource surface differs between
/// versions, so each version carries an explicit capability list rather
/// than one hard-coded set.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ApiVersion, ResourceFamily};
///
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(version.to_string(), "v3");
/// assert!(version.supports(ResourceFamily::Segments));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2 (legacy; customers only).
    V2,
    /// API version 3 (current).
    V3,
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns the path segment for this version (e.g. `"v3"`).
    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }

    /// Returns the resource families available in this API version.
    #[must_use]
    pub const fn available_resources(&self) -> &'static [ResourceFamily] {
        match self {
            Self::V2 => &[ResourceFamily::Customers],
            Self::V3 => &[
                ResourceFamily::Customers,
                ResourceFamily::Inventories,
                ResourceFamily::Segments,
                ResourceFamily::Subscribers,
            ],
        }
    }

    /// Returns `true` if the given resource family exists in this version.
    #[must_use]
    pub fn supports(&self, family: ResourceFamily) -> bool {
        self.available_resources().contains(&family)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

//! Listing filters
//!
//! Listing calls take a [`DescriptorFilter`], an opaque predicate. Permission
//! layers hand in whatever closure they need; the shell registry additionally
//! offers [`ShellDescriptorFilter`] for asset kind and asset type selection.

use crate::value_objects::descriptor::{AssetKind, ShellDescriptor};
use std::fmt;
use std::sync::Arc;

type Predicate<D> = Arc<dyn Fn(&D) -> bool + Send + Sync>;

/// Opaque predicate applied to listings
pub struct DescriptorFilter<D> {
    predicate: Option<Predicate<D>>,
}

impl<D> DescriptorFilter<D> {
    /// Filter that lets everything through
    pub fn allow_all() -> Self {
        Self { predicate: None }
    }

    /// Filter backed by an arbitrary predicate
    pub fn from_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&D) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Some(Arc::new(predicate)),
        }
    }

    /// Whether the descriptor passes
    pub fn matches(&self, descriptor: &D) -> bool {
        self.predicate.as_ref().is_none_or(|p| p(descriptor))
    }
}

impl<D: 'static> DescriptorFilter<D> {
    /// Both filters must pass
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self.predicate, other.predicate) {
            (None, None) => Self::allow_all(),
            (Some(p), None) | (None, Some(p)) => Self { predicate: Some(p) },
            (Some(a), Some(b)) => Self::from_predicate(move |d| a(d) && b(d)),
        }
    }
}

impl<D> Clone for DescriptorFilter<D> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
        }
    }
}

impl<D> Default for DescriptorFilter<D> {
    fn default() -> Self {
        Self::allow_all()
    }
}

impl<D> fmt::Debug for DescriptorFilter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorFilter")
            .field("allow_all", &self.predicate.is_none())
            .finish()
    }
}

/// Asset kind / asset type selection for shell listings
///
/// `NotApplicable` selects shells without an asset kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellDescriptorFilter {
    pub asset_kind: Option<AssetKind>,
    pub asset_type: Option<String>,
}

impl ShellDescriptorFilter {
    /// Select by asset kind
    #[must_use]
    pub fn with_asset_kind(mut self, kind: AssetKind) -> Self {
        self.asset_kind = Some(kind);
        self
    }

    /// Select by asset type
    #[must_use]
    pub fn with_asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    /// Whether the shell descriptor passes
    pub fn matches(&self, descriptor: &ShellDescriptor) -> bool {
        self.matches_kind(descriptor.asset_kind) && self.matches_type(descriptor.asset_type.as_deref())
    }

    fn matches_kind(&self, kind: Option<AssetKind>) -> bool {
        match self.asset_kind {
            None => true,
            Some(AssetKind::NotApplicable) => kind.is_none(),
            Some(wanted) => kind == Some(wanted),
        }
    }

    fn matches_type(&self, asset_type: Option<&str>) -> bool {
        self.asset_type
            .as_deref()
            .is_none_or(|wanted| asset_type == Some(wanted))
    }
}

impl From<ShellDescriptorFilter> for DescriptorFilter<ShellDescriptor> {
    fn from(filter: ShellDescriptorFilter) -> Self {
        if filter.asset_kind.is_none() && filter.asset_type.is_none() {
            return Self::allow_all();
        }
        Self::from_predicate(move |d| filter.matches(d))
    }
}

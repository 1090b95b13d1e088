//! Declarative per-provider quirks.
//!
//! A provider that misclassifies its symbols, or whose tree shape hides
//! meaningful structure, is described here by data: remap rows for its kind
//! codes and the overview policy to use. Core logic never branches on a
//! provider id.

use crate::overview::OverviewPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use symlens_api::{CanonicalKind, ProviderId};

/// LSP `SymbolKind::String`, used by heading providers for every heading.
const LSP_STRING: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindOverride {
    pub code: u32,
    pub kind: CanonicalKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub provider: ProviderId,
    #[serde(default)]
    pub kind_overrides: Vec<KindOverride>,
    #[serde(default)]
    pub overview: OverviewPolicy,
}

impl ProviderProfile {
    pub fn new(provider: ProviderId) -> Self {
        Self {
            provider,
            kind_overrides: Vec::new(),
            overview: OverviewPolicy::default(),
        }
    }

    pub fn remap(mut self, code: u32, kind: CanonicalKind) -> Self {
        self.kind_overrides.push(KindOverride { code, kind });
        self
    }

    pub fn overview(mut self, policy: OverviewPolicy) -> Self {
        self.overview = policy;
        self
    }
}

/// Heading providers report every heading as a string literal and nest
/// sub-headings below their parents. Headings are containers, and every
/// level belongs in the overview.
const BUILTIN: &[(ProviderId, &[(u32, CanonicalKind)], OverviewPolicy)] = &[
    (
        ProviderId::MARKSMAN,
        &[(LSP_STRING, CanonicalKind::Namespace)],
        OverviewPolicy::FlattenAll,
    ),
    (
        ProviderId::MARKDOWN_HEADINGS,
        &[(LSP_STRING, CanonicalKind::Namespace)],
        OverviewPolicy::FlattenAll,
    ),
];

/// Registry of provider profiles, keyed by provider id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderProfiles {
    profiles: BTreeMap<ProviderId, ProviderProfile>,
}

impl ProviderProfiles {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Profiles compiled into the crate.
    pub fn builtin() -> Self {
        let mut profiles = Self::empty();
        for (provider, rows, overview) in BUILTIN {
            let profile = rows
                .iter()
                .fold(ProviderProfile::new(provider.clone()), |p, (code, kind)| {
                    p.remap(*code, *kind)
                })
                .overview(*overview);
            profiles.insert(profile);
        }
        profiles
    }

    /// Add a profile, replacing any earlier profile for the same provider.
    pub fn insert(&mut self, profile: ProviderProfile) {
        if self.profiles.contains_key(&profile.provider) {
            tracing::debug!("replacing profile for provider '{}'", profile.provider);
        }
        self.profiles.insert(profile.provider.clone(), profile);
    }

    pub fn extend(&mut self, profiles: impl IntoIterator<Item = ProviderProfile>) {
        for profile in profiles {
            self.insert(profile);
        }
    }

    pub fn get(&self, provider: &ProviderId) -> Option<&ProviderProfile> {
        self.profiles.get(provider)
    }

    /// Overview policy for a provider; providers without a profile get the default.
    pub fn overview_policy(&self, provider: &ProviderId) -> OverviewPolicy {
        self.get(provider)
            .map(|p| p.overview)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

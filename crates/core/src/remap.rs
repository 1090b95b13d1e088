use crate::profile::ProviderProfiles;
use std::collections::HashMap;
use symlens_api::{CanonicalKind, ProviderId};

/// Maps (provider, provider kind code) to a canonical kind.
///
/// Total: codes without an override pass through when they name a canonical
/// kind, and fall back to [`CanonicalKind::GENERIC_CONTAINER`] otherwise.
#[derive(Debug, Clone, Default)]
pub struct KindRemapTable {
    overrides: HashMap<ProviderId, HashMap<u32, CanonicalKind>>,
}

impl KindRemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles(profiles: &ProviderProfiles) -> Self {
        let mut table = Self::new();
        for profile in profiles.iter() {
            for row in &profile.kind_overrides {
                table.insert(profile.provider.clone(), row.code, row.kind);
            }
        }
        table
    }

    pub fn with_override(mut self, provider: ProviderId, code: u32, kind: CanonicalKind) -> Self {
        self.insert(provider, code, kind);
        self
    }

    fn insert(&mut self, provider: ProviderId, code: u32, kind: CanonicalKind) {
        self.overrides.entry(provider).or_default().insert(code, kind);
    }

    pub fn remap(&self, provider: &ProviderId, code: u32) -> CanonicalKind {
        if let Some(kind) = self.overrides.get(provider).and_then(|rows| rows.get(&code)) {
            return *kind;
        }
        CanonicalKind::from_code(code).unwrap_or_else(|| {
            tracing::debug!(
                "no canonical kind for code {} from provider '{}', using {}",
                code,
                provider,
                CanonicalKind::GENERIC_CONTAINER
            );
            CanonicalKind::GENERIC_CONTAINER
        })
    }
}

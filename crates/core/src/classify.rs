use crate::config::ClassifierConfig;
use std::collections::BTreeSet;
use symlens_api::CanonicalKind;

/// Decides which canonical kinds are outline noise.
///
/// Container kinds are never low-level, whatever the configuration says.
#[derive(Debug, Clone)]
pub struct LowLevelClassifier {
    low_level: BTreeSet<CanonicalKind>,
    module_scope_constants_high_level: bool,
}

impl LowLevelClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let mut low_level = BTreeSet::new();
        for kind in &config.low_level {
            if kind.is_container() {
                tracing::warn!("ignoring container kind {} in low-level policy", kind);
                continue;
            }
            low_level.insert(*kind);
        }
        Self {
            low_level,
            module_scope_constants_high_level: config.module_scope_constants_high_level,
        }
    }

    pub fn is_low_level(&self, kind: CanonicalKind) -> bool {
        self.low_level.contains(&kind)
    }

    /// Like [`Self::is_low_level`], with module-scope constants kept as outline-worthy.
    pub fn is_low_level_at(&self, kind: CanonicalKind, depth: usize) -> bool {
        if kind == CanonicalKind::Constant && depth == 0 && self.module_scope_constants_high_level
        {
            return false;
        }
        self.is_low_level(kind)
    }
}

impl Default for LowLevelClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containers_and_definitions_are_high_level() {
        let classifier = LowLevelClassifier::default();
        for kind in [
            CanonicalKind::Namespace,
            CanonicalKind::Class,
            CanonicalKind::Interface,
            CanonicalKind::Module,
            CanonicalKind::Function,
            CanonicalKind::Method,
            CanonicalKind::Field,
            CanonicalKind::Property,
        ] {
            assert!(!classifier.is_low_level(kind), "{kind} should be high-level");
        }
    }

    #[test]
    fn value_kinds_are_low_level() {
        let classifier = LowLevelClassifier::default();
        for kind in [
            CanonicalKind::Variable,
            CanonicalKind::Constant,
            CanonicalKind::String,
            CanonicalKind::Number,
            CanonicalKind::EnumMember,
        ] {
            assert!(classifier.is_low_level(kind), "{kind} should be low-level");
        }
    }

    #[test]
    fn module_scope_constants_are_kept() {
        let classifier = LowLevelClassifier::default();
        assert!(!classifier.is_low_level_at(CanonicalKind::Constant, 0));
        assert!(classifier.is_low_level_at(CanonicalKind::Constant, 1));
        assert!(classifier.is_low_level_at(CanonicalKind::Variable, 0));
    }

    #[test]
    fn module_scope_exception_can_be_disabled() {
        let classifier = LowLevelClassifier::new(&ClassifierConfig {
            module_scope_constants_high_level: false,
            ..ClassifierConfig::default()
        });
        assert!(classifier.is_low_level_at(CanonicalKind::Constant, 0));
    }

    #[test]
    fn configured_container_kinds_are_ignored() {
        let classifier = LowLevelClassifier::new(&ClassifierConfig {
            low_level: vec![CanonicalKind::Namespace, CanonicalKind::Variable],
            ..ClassifierConfig::default()
        });
        assert!(!classifier.is_low_level(CanonicalKind::Namespace));
        assert!(classifier.is_low_level(CanonicalKind::Variable));
    }

    #[test]
    fn every_container_is_high_level() {
        let classifier = LowLevelClassifier::new(&ClassifierConfig {
            low_level: CanonicalKind::ALL.to_vec(),
            ..ClassifierConfig::default()
        });
        for kind in CanonicalKind::ALL.into_iter().filter(|k| k.is_container()) {
            assert!(!classifier.is_low_level(kind));
        }
    }
}

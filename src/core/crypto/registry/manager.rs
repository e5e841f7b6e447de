/*!
Registry manager for cryptographic algorithms.

This module provides the registry that maps algorithm names to their
descriptors and provider handles, enabling runtime selection without a
branch per algorithm.
*/

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::core::crypto::algorithms::{builtin_providers, catalog::builtin_catalog};
use crate::core::crypto::traits::{KemScheme, ProviderHandle, SignatureScheme};
use crate::core::crypto::types::{AlgorithmDescriptor, AlgorithmFamily, AlgorithmKind};
use crate::core::error::{Error, Result};

/// One algorithm as seen by [`AlgorithmRegistry::list`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmListing {
    /// Provider-reported sizes when enabled, published sizes otherwise
    pub descriptor: AlgorithmDescriptor,
    /// Whether a provider is available in this build
    pub enabled: bool,
    /// Other names the algorithm answers to
    pub aliases: Vec<String>,
}

struct RegistryEntry {
    declared: AlgorithmDescriptor,
    aliases: Vec<String>,
    provider: Option<ProviderHandle>,
}

impl RegistryEntry {
    fn descriptor(&self) -> &AlgorithmDescriptor {
        match &self.provider {
            Some(provider) => provider.descriptor(),
            None => &self.declared,
        }
    }

    fn listing(&self) -> AlgorithmListing {
        AlgorithmListing {
            descriptor: self.descriptor().clone(),
            enabled: self.provider.is_some(),
            aliases: self.aliases.clone(),
        }
    }
}

/// Registry of known algorithms and the providers that implement them
pub struct AlgorithmRegistry {
    entries: Vec<RegistryEntry>,
    /// Lower-cased name or alias -> index into `entries`
    index: HashMap<String, usize>,
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a registry with the built-in catalog and every provider
    /// compiled into this build
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();

        for entry in builtin_catalog() {
            registry.declare(entry.descriptor, entry.aliases.iter().map(|a| a.to_string()).collect());
        }

        for provider in builtin_providers() {
            registry.attach(provider);
        }

        log::debug!(
            "Algorithm registry initialised: {} known, {} enabled",
            registry.entries.len(),
            registry.entries.iter().filter(|e| e.provider.is_some()).count()
        );
        registry
    }

    /// Declare a known algorithm without a provider
    pub fn declare(&mut self, descriptor: AlgorithmDescriptor, aliases: Vec<String>) {
        match self.position(descriptor.name()) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.declared = descriptor;
                for alias in aliases {
                    if !entry.aliases.contains(&alias) {
                        entry.aliases.push(alias);
                    }
                }
                let aliases = entry.aliases.clone();
                for alias in aliases {
                    self.index.insert(alias.to_ascii_lowercase(), idx);
                }
            }
            None => {
                let idx = self.entries.len();
                self.index.insert(descriptor.name().to_ascii_lowercase(), idx);
                for alias in &aliases {
                    self.index.insert(alias.to_ascii_lowercase(), idx);
                }
                self.entries.push(RegistryEntry {
                    declared: descriptor,
                    aliases,
                    provider: None,
                });
            }
        }
    }

    /// Register a signature provider, replacing any provider of the same name
    pub fn register_signature(&mut self, scheme: Arc<dyn SignatureScheme>) {
        self.attach(ProviderHandle::Signature(scheme));
    }

    /// Register a KEM provider, replacing any provider of the same name
    pub fn register_kem(&mut self, scheme: Arc<dyn KemScheme>) {
        self.attach(ProviderHandle::Kem(scheme));
    }

    fn attach(&mut self, provider: ProviderHandle) {
        let descriptor = provider.descriptor().clone();
        let idx = match self.position(descriptor.name()) {
            Some(idx) => idx,
            None => {
                self.declare(descriptor.clone(), Vec::new());
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[idx];
        if entry.declared != descriptor {
            log::debug!(
                "{}: provider reports {} B public / {} B secret key, catalog lists {} B / {} B",
                descriptor.name(),
                descriptor.public_key_len(),
                descriptor.secret_key_len(),
                entry.declared.public_key_len(),
                entry.declared.secret_key_len()
            );
        }
        if !descriptor.is_well_formed() {
            log::warn!("{}: provider declares a zero length, leaving it disabled", descriptor.name());
            return;
        }
        entry.provider = Some(provider);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_ascii_lowercase()).copied()
    }

    fn entry(&self, name: &str) -> Option<&RegistryEntry> {
        self.position(name).map(|idx| &self.entries[idx])
    }

    /// Every known algorithm. Order is unspecified.
    pub fn list(&self) -> Vec<AlgorithmListing> {
        self.entries.iter().map(RegistryEntry::listing).collect()
    }

    /// Known algorithms of one family
    pub fn list_family(&self, family: AlgorithmFamily) -> Vec<AlgorithmListing> {
        self.entries
            .iter()
            .filter(|e| e.descriptor().family() == family)
            .map(RegistryEntry::listing)
            .collect()
    }

    /// Descriptors of every usable algorithm
    pub fn enabled(&self) -> Vec<AlgorithmDescriptor> {
        self.entries
            .iter()
            .filter_map(|e| e.provider.as_ref().map(|p| p.descriptor().clone()))
            .collect()
    }

    /// Whether `name` is known and usable in this build
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entry(name).is_some_and(|e| e.provider.is_some())
    }

    /// Descriptor for a usable algorithm
    pub fn describe(&self, name: &str) -> Result<AlgorithmDescriptor> {
        self.provider(name).map(|p| p.descriptor().clone())
    }

    /// Provider for a usable algorithm
    pub fn provider(&self, name: &str) -> Result<&ProviderHandle> {
        self.entry(name)
            .and_then(|e| e.provider.as_ref())
            .ok_or_else(|| Error::AlgorithmUnavailable { name: name.to_string() })
    }

    /// Signature provider for `name`
    pub fn signature_scheme(&self, name: &str) -> Result<Arc<dyn SignatureScheme>> {
        match self.provider(name)? {
            ProviderHandle::Signature(scheme) => Ok(Arc::clone(scheme)),
            ProviderHandle::Kem(_) => Err(Error::KindMismatch {
                name: name.to_string(),
                expected: AlgorithmKind::Signature,
                actual: AlgorithmKind::Kem,
            }),
        }
    }

    /// KEM provider for `name`
    pub fn kem_scheme(&self, name: &str) -> Result<Arc<dyn KemScheme>> {
        match self.provider(name)? {
            ProviderHandle::Kem(scheme) => Ok(Arc::clone(scheme)),
            ProviderHandle::Signature(_) => Err(Error::KindMismatch {
                name: name.to_string(),
                expected: AlgorithmKind::Kem,
                actual: AlgorithmKind::Signature,
            }),
        }
    }

    /// First usable algorithm in order of preference
    pub fn first_enabled(&self, preferences: &[&str]) -> Option<AlgorithmDescriptor> {
        preferences.iter().find_map(|name| self.describe(name).ok())
    }
}

// Global registry instance
static REGISTRY: Lazy<AlgorithmRegistry> = Lazy::new(AlgorithmRegistry::with_builtin);

/// The process-wide registry of built-in algorithms
pub fn default_registry() -> &'static AlgorithmRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_is_unavailable() {
        let registry = AlgorithmRegistry::with_builtin();
        assert!(!registry.is_enabled("not-a-real-algorithm"));
        match registry.describe("not-a-real-algorithm") {
            Err(Error::AlgorithmUnavailable { name }) => assert_eq!(name, "not-a-real-algorithm"),
            other => panic!("expected AlgorithmUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_is_listed_even_when_compiled_out() {
        let registry = AlgorithmRegistry::with_builtin();
        let listing = registry.list();
        assert_eq!(listing.len(), builtin_catalog().len());
        for item in &listing {
            assert_eq!(item.enabled, item.descriptor.family().is_available());
        }
    }

    #[test]
    fn test_declared_only_is_not_enabled() {
        let mut registry = AlgorithmRegistry::new();
        registry.declare(
            AlgorithmDescriptor::kem("Toy-KEM", AlgorithmFamily::Custom, 1, 1, 1, 1),
            vec!["toy".into()],
        );
        assert!(!registry.is_enabled("Toy-KEM"));
        assert!(matches!(registry.describe("toy"), Err(Error::AlgorithmUnavailable { .. })));
        assert_eq!(registry.list().len(), 1);
    }

    #[cfg(feature = "ml-kem")]
    #[test]
    fn test_alias_and_case_insensitive_lookup() {
        let registry = AlgorithmRegistry::with_builtin();
        let canonical = registry.describe("ML-KEM-768").unwrap();
        assert_eq!(registry.describe("kyber768").unwrap(), canonical);
        assert_eq!(registry.describe("ml-kem-768").unwrap(), canonical);
    }

    #[cfg(all(feature = "ml-kem", feature = "ml-dsa"))]
    #[test]
    fn test_kind_mismatch() {
        let registry = AlgorithmRegistry::with_builtin();
        assert!(matches!(
            registry.signature_scheme("ML-KEM-768"),
            Err(Error::KindMismatch { expected: AlgorithmKind::Signature, .. })
        ));
        assert!(matches!(
            registry.kem_scheme("ML-DSA-44"),
            Err(Error::KindMismatch { expected: AlgorithmKind::Kem, .. })
        ));
    }

    #[cfg(feature = "ml-dsa")]
    #[test]
    fn test_first_enabled_skips_unknown() {
        let registry = AlgorithmRegistry::with_builtin();
        let chosen = registry.first_enabled(&["no-such-scheme", "ML-DSA-65", "ML-DSA-44"]).unwrap();
        assert_eq!(chosen.name(), "ML-DSA-65");
    }
}

/*!
Core traits for cryptographic operations.

This module defines the interfaces a cryptographic provider implements
for the harness to drive it. Implement these to plug in a backend.
*/

pub mod kem;
pub mod signature;

use std::sync::Arc;

use crate::core::crypto::types::AlgorithmDescriptor;

// Re-export core traits for easier access
pub use kem::KemScheme;
pub use signature::SignatureScheme;

/// Handle to a provider, by the shape of its operations
#[derive(Clone)]
pub enum ProviderHandle {
    Signature(Arc<dyn SignatureScheme>),
    Kem(Arc<dyn KemScheme>),
}

impl ProviderHandle {
    /// Descriptor reported by the provider
    pub fn descriptor(&self) -> &AlgorithmDescriptor {
        match self {
            ProviderHandle::Signature(scheme) => scheme.descriptor(),
            ProviderHandle::Kem(scheme) => scheme.descriptor(),
        }
    }
}

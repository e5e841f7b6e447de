/*!
Implementations of cryptographic algorithms.

This module provides the built-in providers and the catalog of every
parameter set the harness knows by name, whether or not its provider is
compiled into this build.
*/

// Key encapsulation algorithms
pub mod kem;

// Signature algorithms
pub mod signatures;

// Known parameter sets
pub mod catalog;

use crate::core::crypto::traits::ProviderHandle;

/// Provider handles for every algorithm compiled into this build
pub fn builtin_providers() -> Vec<ProviderHandle> {
    signatures::builtin_schemes()
        .into_iter()
        .map(ProviderHandle::Signature)
        .chain(kem::builtin_schemes().into_iter().map(ProviderHandle::Kem))
        .collect()
}

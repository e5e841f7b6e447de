/*!
Cryptographic components for the PQC harness.

This module provides the provider interface, the built-in providers and
the registry that resolves algorithm names to them.
*/

// Descriptors, keys and outputs
pub mod types;

// Provider interface
pub mod traits;

// Built-in providers and the catalog of known parameter sets
pub mod algorithms;

// Registry for algorithm management
pub mod registry;

// Re-export frequently used types
pub use registry::{AlgorithmListing, AlgorithmRegistry, default_registry};
pub use traits::{KemScheme, ProviderHandle, SignatureScheme};
pub use types::{
    AlgorithmDescriptor, AlgorithmFamily, AlgorithmKind, Ciphertext, Encapsulation, KeyPair, OutputLengths,
    SharedSecret, Signature,
};

/*!
Registry for cryptographic algorithms.

This module provides a central registry for supported algorithms
to enable runtime selection by name.
*/

pub mod manager;

// Re-export registry manager types
pub use manager::{AlgorithmListing, AlgorithmRegistry, default_registry};

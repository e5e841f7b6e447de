/*!
Core types for cryptographic operations.

This module provides the type definitions and enums used throughout the
cryptographic subsystem.
*/

pub mod algorithms;
pub mod descriptor;
pub mod keys;

// Re-export core types for easier access
pub use algorithms::{AlgorithmFamily, AlgorithmKind};
pub use descriptor::{AlgorithmDescriptor, OutputLengths};
pub use keys::{Ciphertext, Encapsulation, KeyPair, SharedSecret, Signature};

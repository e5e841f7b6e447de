//! Core components for the PQC harness.
//!
//! This module contains the fundamental building blocks of the harness,
//! including the provider interface, the algorithm registry, secret
//! handling and error handling.

// Export cryptographic functionality
pub mod crypto;

// Export memory handling for sensitive data
pub mod memory;

// Export security utilities
pub mod security;

// Harness constants
pub mod constants;

// Run configuration
pub mod config;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::config::HarnessConfig;
pub use self::constants::VERSION;
pub use self::error::{Error, ErrorClass, ProviderError, ProviderResult, Result};

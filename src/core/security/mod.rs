/*!
Security utilities for the PQC harness.

This module provides constant-time operations for comparing secret
material produced during a run.
*/

// Constant-time operations to prevent timing attacks
pub mod constant_time;

// Re-export main components
pub use constant_time::constant_time_eq;

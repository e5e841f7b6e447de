/*!
Constants for the PQC harness.

Default inputs for the harness workflows and the preferred order used
when no algorithm is named.
*/

/// Harness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default hex preview length in bytes
pub const DEFAULT_PREVIEW_BYTES: usize = 32;

/// Default inputs for the signature workflow
pub mod messages {
    /// Message signed and verified by default
    pub const PRIMARY: &str = "This is an important document that requires post-quantum signatures!";

    /// Message expected to be rejected against the primary signature
    pub const TAMPERED: &str = "This is a tampered document that requires post-quantum signatures!";

    /// Message signed with the same key pair for the cross-message check
    pub const SECOND: &str = "This is the second document with different content";

    /// Message signed during benchmarking
    pub const BENCHMARK: &str = "Benchmark message";
}

/// Algorithms tried in order when none is requested explicitly
pub const PREFERRED_ALGORITHMS: &[&str] = &[
    "ML-DSA-65",
    "ML-DSA-44",
    "ML-DSA-87",
    "Falcon-512",
    "SLH-DSA-SHA2-128f",
    "ML-KEM-768",
];

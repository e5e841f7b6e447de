/*!
Configuration for the PQC harness.

This module provides the inputs and switches a harness run uses.
*/

use crate::core::constants::{DEFAULT_PREVIEW_BYTES, messages};

/// Inputs and switches for one harness run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct HarnessConfig {
    /// Message that is signed and verified
    pub message: Vec<u8>,
    /// Message that must not verify against the signature of `message`
    pub tampered_message: Vec<u8>,
    /// Message signed with the same key pair for the cross-message check
    pub second_message: Vec<u8>,
    /// Sign `second_message` too and check the signatures do not cross-verify
    pub multi_message: bool,
    /// Decapsulate a corrupted ciphertext and expect a different secret
    pub kem_tamper_check: bool,
    /// Number of bytes shown in hex previews
    pub preview_bytes: usize,
    /// Time keygen, operation and verification after the workflow
    pub benchmark: bool,
    /// Message signed while benchmarking
    pub benchmark_message: Vec<u8>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            message: messages::PRIMARY.as_bytes().to_vec(),
            tampered_message: messages::TAMPERED.as_bytes().to_vec(),
            second_message: messages::SECOND.as_bytes().to_vec(),
            multi_message: true,
            kem_tamper_check: true,
            preview_bytes: DEFAULT_PREVIEW_BYTES,
            benchmark: false,
            benchmark_message: messages::BENCHMARK.as_bytes().to_vec(),
        }
    }
}

impl HarnessConfig {
    /// Create a configuration with the default inputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message to sign
    pub fn with_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the tampered message
    pub fn with_tampered_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.tampered_message = message.into();
        self
    }

    /// Set the second message
    pub fn with_second_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.second_message = message.into();
        self
    }

    /// Enable or disable the cross-message check
    pub fn with_multi_message(mut self, enabled: bool) -> Self {
        self.multi_message = enabled;
        self
    }

    /// Enable or disable the corrupted-ciphertext check
    pub fn with_kem_tamper_check(mut self, enabled: bool) -> Self {
        self.kem_tamper_check = enabled;
        self
    }

    /// Set the hex preview length
    pub fn with_preview_bytes(mut self, bytes: usize) -> Self {
        self.preview_bytes = bytes;
        self
    }

    /// Enable or disable benchmarking
    pub fn with_benchmark(mut self, enabled: bool) -> Self {
        self.benchmark = enabled;
        self
    }

    /// Set the message signed while benchmarking
    pub fn with_benchmark_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.benchmark_message = message.into();
        self
    }

    /// The tampered message to check against a signature of `signed`.
    ///
    /// Returns the configured tampered message unless it equals `signed`,
    /// in which case the last byte is flipped (or a byte appended to an
    /// empty message) so the two always differ.
    pub fn tampered_for(&self, signed: &[u8]) -> Vec<u8> {
        if self.tampered_message != signed {
            return self.tampered_message.clone();
        }

        let mut tampered = signed.to_vec();
        match tampered.last_mut() {
            Some(last) => *last ^= 0x01,
            None => tampered.push(0x01),
        }
        tampered
    }
}

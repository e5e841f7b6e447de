/*!
Static metadata describing one algorithm variant.
*/

use crate::core::crypto::types::algorithms::{AlgorithmFamily, AlgorithmKind};

/// Output sizes, which differ in shape between signatures and KEMs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputLengths {
    /// Upper bound on the size of a detached signature
    Signature { signature_len: usize },
    /// Fixed ciphertext and shared secret sizes
    Kem {
        ciphertext_len: usize,
        shared_secret_len: usize,
    },
}

/// Immutable description of one primitive variant.
///
/// Lengths are in bytes. For an enabled algorithm every length is non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmDescriptor {
    name: String,
    family: AlgorithmFamily,
    public_key_len: usize,
    secret_key_len: usize,
    outputs: OutputLengths,
}

impl AlgorithmDescriptor {
    /// Describe a signature scheme
    pub fn signature(
        name: impl Into<String>,
        family: AlgorithmFamily,
        public_key_len: usize,
        secret_key_len: usize,
        signature_len: usize,
    ) -> Self {
        Self {
            name: name.into(),
            family,
            public_key_len,
            secret_key_len,
            outputs: OutputLengths::Signature { signature_len },
        }
    }

    /// Describe a key-encapsulation mechanism
    pub fn kem(
        name: impl Into<String>,
        family: AlgorithmFamily,
        public_key_len: usize,
        secret_key_len: usize,
        ciphertext_len: usize,
        shared_secret_len: usize,
    ) -> Self {
        Self {
            name: name.into(),
            family,
            public_key_len,
            secret_key_len,
            outputs: OutputLengths::Kem {
                ciphertext_len,
                shared_secret_len,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> AlgorithmFamily {
        self.family
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self.outputs {
            OutputLengths::Signature { .. } => AlgorithmKind::Signature,
            OutputLengths::Kem { .. } => AlgorithmKind::Kem,
        }
    }

    pub fn public_key_len(&self) -> usize {
        self.public_key_len
    }

    pub fn secret_key_len(&self) -> usize {
        self.secret_key_len
    }

    pub fn outputs(&self) -> OutputLengths {
        self.outputs
    }

    /// Maximum signature length, for signature schemes
    pub fn signature_len(&self) -> Option<usize> {
        match self.outputs {
            OutputLengths::Signature { signature_len } => Some(signature_len),
            OutputLengths::Kem { .. } => None,
        }
    }

    /// Ciphertext length, for KEMs
    pub fn ciphertext_len(&self) -> Option<usize> {
        match self.outputs {
            OutputLengths::Kem { ciphertext_len, .. } => Some(ciphertext_len),
            OutputLengths::Signature { .. } => None,
        }
    }

    /// Shared secret length, for KEMs
    pub fn shared_secret_len(&self) -> Option<usize> {
        match self.outputs {
            OutputLengths::Kem { shared_secret_len, .. } => Some(shared_secret_len),
            OutputLengths::Signature { .. } => None,
        }
    }

    /// Whether every declared length is non-zero
    pub fn is_well_formed(&self) -> bool {
        let outputs_ok = match self.outputs {
            OutputLengths::Signature { signature_len } => signature_len > 0,
            OutputLengths::Kem {
                ciphertext_len,
                shared_secret_len,
            } => ciphertext_len > 0 && shared_secret_len > 0,
        };
        !self.name.is_empty() && self.public_key_len > 0 && self.secret_key_len > 0 && outputs_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_descriptor() {
        let d = AlgorithmDescriptor::signature("ML-DSA-44", AlgorithmFamily::MlDsa, 1312, 2560, 2420);
        assert_eq!(d.kind(), AlgorithmKind::Signature);
        assert_eq!(d.signature_len(), Some(2420));
        assert_eq!(d.ciphertext_len(), None);
        assert!(d.is_well_formed());
    }

    #[test]
    fn test_kem_descriptor() {
        let d = AlgorithmDescriptor::kem("ML-KEM-768", AlgorithmFamily::MlKem, 1184, 2400, 1088, 32);
        assert_eq!(d.kind(), AlgorithmKind::Kem);
        assert_eq!(d.ciphertext_len(), Some(1088));
        assert_eq!(d.shared_secret_len(), Some(32));
        assert_eq!(d.signature_len(), None);
    }

    #[test]
    fn test_zero_length_is_not_well_formed() {
        let d = AlgorithmDescriptor::kem("broken", AlgorithmFamily::Custom, 32, 32, 0, 32);
        assert!(!d.is_well_formed());
    }
}

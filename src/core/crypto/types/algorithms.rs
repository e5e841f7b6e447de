/*!
Algorithm type definitions.

This module defines the kinds and families of primitives the harness
knows how to drive.
*/

use std::fmt;
use std::str::FromStr;

/// Shape of a primitive: what operations it offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    /// keypair / sign / verify
    Signature,
    /// keypair / encapsulate / decapsulate
    Kem,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Signature => write!(f, "signature"),
            AlgorithmKind::Kem => write!(f, "KEM"),
        }
    }
}

/// Algorithm families the built-in providers cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmFamily {
    /// ML-DSA / CRYSTALS-Dilithium
    MlDsa,
    /// SLH-DSA / SPHINCS+
    SlhDsa,
    /// Falcon
    Falcon,
    /// ML-KEM / CRYSTALS-Kyber
    MlKem,
    /// Anything registered by a caller
    Custom,
}

impl AlgorithmFamily {
    /// All built-in families
    pub const BUILTIN: [AlgorithmFamily; 4] = [
        AlgorithmFamily::MlDsa,
        AlgorithmFamily::SlhDsa,
        AlgorithmFamily::Falcon,
        AlgorithmFamily::MlKem,
    ];

    /// Get the name of the family as a string
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmFamily::MlDsa => "ML-DSA",
            AlgorithmFamily::SlhDsa => "SLH-DSA",
            AlgorithmFamily::Falcon => "Falcon",
            AlgorithmFamily::MlKem => "ML-KEM",
            AlgorithmFamily::Custom => "custom",
        }
    }

    /// Check if the family's provider is compiled into the current build
    pub fn is_available(&self) -> bool {
        match self {
            AlgorithmFamily::MlDsa => cfg!(feature = "ml-dsa"),
            AlgorithmFamily::SlhDsa => cfg!(feature = "slh-dsa"),
            AlgorithmFamily::Falcon => cfg!(feature = "falcon"),
            AlgorithmFamily::MlKem => cfg!(feature = "ml-kem"),
            AlgorithmFamily::Custom => true,
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "ml-dsa" | "mldsa" | "dilithium" => Ok(AlgorithmFamily::MlDsa),
            "slh-dsa" | "slhdsa" | "sphincs" | "sphincs+" => Ok(AlgorithmFamily::SlhDsa),
            "falcon" => Ok(AlgorithmFamily::Falcon),
            "ml-kem" | "mlkem" | "kyber" => Ok(AlgorithmFamily::MlKem),
            "custom" => Ok(AlgorithmFamily::Custom),
            other => Err(format!("unknown algorithm family: {other}")),
        }
    }
}

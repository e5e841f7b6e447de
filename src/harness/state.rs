/*!
Harness state management.

This module defines the stages a harness moves through. Stages are
ordered, so "at least keys generated" is a plain comparison.
*/

use std::fmt;

/// Progress of a signature harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignatureState {
    /// No keys yet
    Idle,
    /// A key pair is held
    KeysGenerated,
    /// A message has been signed
    Signed,
    /// The last signature verified against its message
    Verified,
}

impl fmt::Display for SignatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureState::Idle => write!(f, "Idle"),
            SignatureState::KeysGenerated => write!(f, "KeysGenerated"),
            SignatureState::Signed => write!(f, "Signed"),
            SignatureState::Verified => write!(f, "Verified"),
        }
    }
}

/// Progress of a KEM harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KemState {
    /// No keys yet
    Idle,
    /// A key pair is held
    KeysGenerated,
    /// A ciphertext and the sender's shared secret are held
    Encapsulated,
    /// The receiver's shared secret has been recovered
    Decapsulated,
    /// Both shared secrets are equal
    Verified,
}

impl fmt::Display for KemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KemState::Idle => write!(f, "Idle"),
            KemState::KeysGenerated => write!(f, "KeysGenerated"),
            KemState::Encapsulated => write!(f, "Encapsulated"),
            KemState::Decapsulated => write!(f, "Decapsulated"),
            KemState::Verified => write!(f, "Verified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_ordered() {
        assert!(SignatureState::Idle < SignatureState::KeysGenerated);
        assert!(SignatureState::Signed < SignatureState::Verified);
        assert!(KemState::Encapsulated < KemState::Decapsulated);
        assert!(KemState::Verified >= KemState::Decapsulated);
    }

    #[test]
    fn test_display() {
        assert_eq!(SignatureState::KeysGenerated.to_string(), "KeysGenerated");
        assert_eq!(KemState::Decapsulated.to_string(), "Decapsulated");
    }
}

/*!
Key material and primitive outputs.
*/

use crate::core::error::ProviderResult;
use crate::core::memory::{SecretBytes, try_copy};

/// A freshly generated key pair.
///
/// The secret half is wiped when the pair is dropped.
#[derive(Debug)]
pub struct KeyPair {
    public_key: Vec<u8>,
    secret_key: SecretBytes,
}

impl KeyPair {
    pub fn new(public_key: Vec<u8>, secret_key: SecretBytes) -> Self {
        Self {
            public_key,
            secret_key,
        }
    }

    /// Copy provider-owned key bytes into harness-owned buffers
    pub fn try_from_slices(public_key: &[u8], secret_key: &[u8]) -> ProviderResult<Self> {
        Ok(Self {
            public_key: try_copy(public_key, "public key")?,
            secret_key: SecretBytes::try_from_slice(secret_key, "secret key")?,
        })
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn secret_key(&self) -> &SecretBytes {
        &self.secret_key
    }
}

/// A detached signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn try_from_slice(bytes: &[u8]) -> ProviderResult<Self> {
        try_copy(bytes, "signature").map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A KEM ciphertext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn try_from_slice(bytes: &[u8]) -> ProviderResult<Self> {
        try_copy(bytes, "ciphertext").map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this ciphertext with one bit flipped in its first byte
    pub fn corrupted(&self) -> Ciphertext {
        let mut bytes = self.0.clone();
        if let Some(first) = bytes.first_mut() {
            *first ^= 0x01;
        }
        Ciphertext(bytes)
    }
}

/// A KEM shared secret
pub type SharedSecret = SecretBytes;

/// Output of one encapsulation
#[derive(Debug)]
pub struct Encapsulation {
    pub ciphertext: Ciphertext,
    pub shared_secret: SharedSecret,
}

//! Toy providers with injectable faults, for unit tests.

use crate::core::crypto::traits::{KemScheme, SignatureScheme};
use crate::core::crypto::types::{
    AlgorithmDescriptor, AlgorithmFamily, Ciphertext, Encapsulation, KeyPair, SharedSecret, Signature,
};
use crate::core::error::{ProviderError, ProviderResult};
use crate::core::memory::SecretBytes;

const KEY_BYTE: u8 = 0x42;
const PUBLIC_KEY_LEN: usize = 16;
const SECRET_KEY_LEN: usize = 24;
const TAG_LEN: usize = 8;
const CIPHERTEXT_LEN: usize = 12;

/// FNV-1a over `key || data`
fn tag(key: u8, data: &[u8]) -> Vec<u8> {
    let mut acc: u64 = 0xcbf2_9ce4_8422_2325;
    for &byte in std::iter::once(&key).chain(data) {
        acc ^= u64::from(byte);
        acc = acc.wrapping_mul(0x0100_0000_01b3);
    }
    acc.to_le_bytes().to_vec()
}

fn toy_keypair(public_key_len: usize) -> KeyPair {
    KeyPair::new(
        vec![KEY_BYTE; public_key_len],
        SecretBytes::new(vec![KEY_BYTE; SECRET_KEY_LEN]),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignatureFault {
    None,
    AcceptAll,
    FailKeygen,
    FailSign,
    ShortPublicKey,
    OversizedSignature,
}

pub(crate) struct ToySignature {
    descriptor: AlgorithmDescriptor,
    fault: SignatureFault,
}

impl ToySignature {
    pub(crate) fn with_fault(fault: SignatureFault) -> Self {
        Self {
            descriptor: AlgorithmDescriptor::signature(
                "Toy-Sig",
                AlgorithmFamily::Custom,
                PUBLIC_KEY_LEN,
                SECRET_KEY_LEN,
                TAG_LEN,
            ),
            fault,
        }
    }
}

impl SignatureScheme for ToySignature {
    fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    fn keypair(&self) -> ProviderResult<KeyPair> {
        match self.fault {
            SignatureFault::FailKeygen => Err(ProviderError::operation_failed("keypair", "injected")),
            SignatureFault::ShortPublicKey => Ok(toy_keypair(PUBLIC_KEY_LEN - 1)),
            _ => Ok(toy_keypair(PUBLIC_KEY_LEN)),
        }
    }

    fn sign(&self, message: &[u8], secret_key: &SecretBytes) -> ProviderResult<Signature> {
        match self.fault {
            SignatureFault::FailSign => Err(ProviderError::operation_failed("sign", "injected")),
            SignatureFault::OversizedSignature => Ok(Signature::new(vec![0; TAG_LEN + 1])),
            _ => Ok(Signature::new(tag(secret_key.expose()[0], message))),
        }
    }

    fn verify(&self, message: &[u8], signature: &Signature, public_key: &[u8]) -> ProviderResult<bool> {
        if self.fault == SignatureFault::AcceptAll {
            return Ok(true);
        }
        Ok(signature.as_bytes() == tag(public_key[0], message).as_slice())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KemFault {
    None,
    Mismatch,
    IgnoresCiphertext,
    ShortCiphertext,
    FailEncapsulate,
}

pub(crate) struct ToyKem {
    descriptor: AlgorithmDescriptor,
    fault: KemFault,
}

impl ToyKem {
    pub(crate) fn with_fault(fault: KemFault) -> Self {
        Self {
            descriptor: AlgorithmDescriptor::kem(
                "Toy-KEM",
                AlgorithmFamily::Custom,
                PUBLIC_KEY_LEN,
                SECRET_KEY_LEN,
                CIPHERTEXT_LEN,
                TAG_LEN,
            ),
            fault,
        }
    }
}

impl KemScheme for ToyKem {
    fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    fn keypair(&self) -> ProviderResult<KeyPair> {
        Ok(toy_keypair(PUBLIC_KEY_LEN))
    }

    fn encapsulate(&self, public_key: &[u8]) -> ProviderResult<Encapsulation> {
        let ciphertext_len = match self.fault {
            KemFault::FailEncapsulate => return Err(ProviderError::operation_failed("encapsulate", "injected")),
            KemFault::ShortCiphertext => CIPHERTEXT_LEN - 1,
            _ => CIPHERTEXT_LEN,
        };
        let ciphertext = vec![0x5a; ciphertext_len];
        Ok(Encapsulation {
            shared_secret: SecretBytes::new(tag(public_key[0], &ciphertext)),
            ciphertext: Ciphertext::new(ciphertext),
        })
    }

    fn decapsulate(&self, ciphertext: &Ciphertext, secret_key: &SecretBytes) -> ProviderResult<SharedSecret> {
        let key = secret_key.expose()[0];
        let secret = match self.fault {
            KemFault::Mismatch => tag(key ^ 0x01, ciphertext.as_bytes()),
            KemFault::IgnoresCiphertext => tag(key, &[0x5a; CIPHERTEXT_LEN]),
            _ => tag(key, ciphertext.as_bytes()),
        };
        Ok(SecretBytes::new(secret))
    }
}

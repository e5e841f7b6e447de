/*!
KEM workflow.

Drives a [`KemScheme`] through `Idle -> KeysGenerated -> Encapsulated ->
Decapsulated -> Verified`. The harness plays both parties: it encapsulates
to its own public key and decapsulates with its own secret key.
*/

use std::sync::Arc;

use crate::core::crypto::registry::AlgorithmRegistry;
use crate::core::crypto::traits::KemScheme;
use crate::core::crypto::types::{AlgorithmDescriptor, Ciphertext, KeyPair, SharedSecret};
use crate::core::error::{Error, Result};
use crate::harness::state::KemState;
use crate::harness::{check_exact_len, invalid_state};

/// Staged encapsulate/decapsulate workflow over one KEM
pub struct KemHarness {
    scheme: Arc<dyn KemScheme>,
    descriptor: AlgorithmDescriptor,
    state: KemState,
    keys: Option<KeyPair>,
    ciphertext: Option<Ciphertext>,
    sender_secret: Option<SharedSecret>,
    receiver_secret: Option<SharedSecret>,
}

impl KemHarness {
    /// Create a harness over `scheme`
    pub fn new(scheme: Arc<dyn KemScheme>) -> Self {
        let descriptor = scheme.descriptor().clone();
        Self {
            scheme,
            descriptor,
            state: KemState::Idle,
            keys: None,
            ciphertext: None,
            sender_secret: None,
            receiver_secret: None,
        }
    }

    /// Create a harness for a registered KEM
    pub fn from_registry(registry: &AlgorithmRegistry, name: &str) -> Result<Self> {
        registry.kem_scheme(name).map(Self::new)
    }

    pub fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> KemState {
        self.state
    }

    pub fn public_key(&self) -> Option<&[u8]> {
        self.keys.as_ref().map(KeyPair::public_key)
    }

    pub fn ciphertext(&self) -> Option<&Ciphertext> {
        self.ciphertext.as_ref()
    }

    /// Shared secret produced by encapsulation
    pub fn encapsulated_secret(&self) -> Option<&SharedSecret> {
        self.sender_secret.as_ref()
    }

    /// Shared secret recovered by decapsulation
    pub fn decapsulated_secret(&self) -> Option<&SharedSecret> {
        self.receiver_secret.as_ref()
    }

    fn name(&self) -> &str {
        self.descriptor.name()
    }

    fn transition(&mut self, next: KemState) {
        log::debug!("{}: {} -> {}", self.descriptor.name(), self.state, next);
        self.state = next;
    }

    fn expected_len(&self, len: Option<usize>, what: &str) -> Result<usize> {
        len.ok_or_else(|| Error::InvariantViolation {
            algorithm: self.name().to_string(),
            detail: format!("descriptor declares no {what} length"),
        })
    }

    /// Generate a key pair and check its lengths against the descriptor
    pub fn generate_keys(&mut self) -> Result<&KeyPair> {
        if self.state != KemState::Idle {
            return Err(invalid_state(self.name(), KemState::Idle, self.state));
        }

        let keys = self
            .scheme
            .keypair()
            .map_err(|err| Error::from_provider(self.name(), err, Error::keygen))?;

        check_exact_len(self.name(), "public key", keys.public_key().len(), self.descriptor.public_key_len())?;
        check_exact_len(self.name(), "secret key", keys.secret_key().len(), self.descriptor.secret_key_len())?;

        self.transition(KemState::KeysGenerated);
        Ok(&*self.keys.insert(keys))
    }

    /// Encapsulate a fresh shared secret to the current public key
    pub fn encapsulate(&mut self) -> Result<&Ciphertext> {
        let Some(keys) = &self.keys else {
            return Err(invalid_state(self.name(), KemState::KeysGenerated, self.state));
        };
        let ciphertext_len = self.expected_len(self.descriptor.ciphertext_len(), "ciphertext")?;
        let secret_len = self.expected_len(self.descriptor.shared_secret_len(), "shared secret")?;

        let encapsulation = self
            .scheme
            .encapsulate(keys.public_key())
            .map_err(|err| Error::from_provider(self.name(), err, Error::encapsulation))?;

        check_exact_len(self.name(), "ciphertext", encapsulation.ciphertext.len(), ciphertext_len)?;
        check_exact_len(self.name(), "shared secret", encapsulation.shared_secret.len(), secret_len)?;

        self.receiver_secret = None;
        self.sender_secret = Some(encapsulation.shared_secret);
        self.transition(KemState::Encapsulated);
        Ok(&*self.ciphertext.insert(encapsulation.ciphertext))
    }

    /// Recover the shared secret from the current ciphertext
    pub fn decapsulate(&mut self) -> Result<&SharedSecret> {
        let (Some(keys), Some(ciphertext)) = (&self.keys, &self.ciphertext) else {
            return Err(invalid_state(self.name(), KemState::Encapsulated, self.state));
        };
        let secret_len = self.expected_len(self.descriptor.shared_secret_len(), "shared secret")?;

        let secret = self
            .scheme
            .decapsulate(ciphertext, keys.secret_key())
            .map_err(|err| Error::from_provider(self.name(), err, Error::decapsulation))?;

        check_exact_len(self.name(), "shared secret", secret.len(), secret_len)?;

        self.transition(KemState::Decapsulated);
        Ok(&*self.receiver_secret.insert(secret))
    }

    /// Compare both shared secrets in constant time
    pub fn verify_agreement(&mut self) -> Result<()> {
        let (Some(sender), Some(receiver)) = (&self.sender_secret, &self.receiver_secret) else {
            return Err(invalid_state(self.name(), KemState::Decapsulated, self.state));
        };

        if !sender.ct_eq(receiver) {
            log::warn!("{}: encapsulated and decapsulated secrets differ", self.name());
            return Err(Error::SharedSecretMismatch {
                algorithm: self.name().to_string(),
            });
        }

        self.transition(KemState::Verified);
        Ok(())
    }

    /// Decapsulate a corrupted copy of the current ciphertext and check the
    /// result differs from the encapsulated secret. A provider that refuses
    /// the corrupted ciphertext outright also passes.
    pub fn verify_tamper_rejected(&self) -> Result<()> {
        let (Some(keys), Some(ciphertext), Some(sender)) = (&self.keys, &self.ciphertext, &self.sender_secret) else {
            return Err(invalid_state(self.name(), KemState::Encapsulated, self.state));
        };

        let corrupted = ciphertext.corrupted();
        match self.scheme.decapsulate(&corrupted, keys.secret_key()) {
            Ok(secret) if secret.ct_eq(sender) => {
                log::warn!("{}: corrupted ciphertext decapsulated to the original secret", self.name());
                Err(Error::TamperAcceptedAnomaly {
                    algorithm: self.name().to_string(),
                })
            }
            Ok(_) => Ok(()),
            Err(err) => {
                log::debug!("{}: corrupted ciphertext refused: {err}", self.name());
                Ok(())
            }
        }
    }
}

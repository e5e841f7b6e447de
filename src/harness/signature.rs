/*!
Signature workflow.

Drives a [`SignatureScheme`] through `Idle -> KeysGenerated -> Signed ->
Verified`. Any number of messages may be signed with one key pair; the
most recent signature is what [`SignatureHarness::verify`] and the tamper
check use.
*/

use std::sync::Arc;

use crate::core::crypto::registry::AlgorithmRegistry;
use crate::core::crypto::traits::SignatureScheme;
use crate::core::crypto::types::{AlgorithmDescriptor, KeyPair, Signature};
use crate::core::error::{Error, Result};
use crate::harness::state::SignatureState;
use crate::harness::{check_exact_len, invalid_state};

/// Outcome of a verification that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Accepted,
    Rejected,
}

impl Verification {
    pub fn is_accepted(self) -> bool {
        self == Verification::Accepted
    }

    /// Treat a rejection of untampered data as a failure
    pub fn require_accepted(self, algorithm: &str) -> Result<()> {
        match self {
            Verification::Accepted => Ok(()),
            Verification::Rejected => Err(Error::UnexpectedRejection {
                algorithm: algorithm.to_string(),
            }),
        }
    }
}

/// Staged sign/verify workflow over one signature scheme
pub struct SignatureHarness {
    scheme: Arc<dyn SignatureScheme>,
    descriptor: AlgorithmDescriptor,
    state: SignatureState,
    keys: Option<KeyPair>,
    last_message: Option<Vec<u8>>,
    last_signature: Option<Signature>,
}

impl SignatureHarness {
    /// Create a harness over `scheme`
    pub fn new(scheme: Arc<dyn SignatureScheme>) -> Self {
        let descriptor = scheme.descriptor().clone();
        Self {
            scheme,
            descriptor,
            state: SignatureState::Idle,
            keys: None,
            last_message: None,
            last_signature: None,
        }
    }

    /// Create a harness for a registered signature algorithm
    pub fn from_registry(registry: &AlgorithmRegistry, name: &str) -> Result<Self> {
        registry.signature_scheme(name).map(Self::new)
    }

    pub fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> SignatureState {
        self.state
    }

    /// Public key of the current key pair
    pub fn public_key(&self) -> Option<&[u8]> {
        self.keys.as_ref().map(KeyPair::public_key)
    }

    /// Most recent signature
    pub fn last_signature(&self) -> Option<&Signature> {
        self.last_signature.as_ref()
    }

    fn name(&self) -> &str {
        self.descriptor.name()
    }

    fn transition(&mut self, next: SignatureState) {
        log::debug!("{}: {} -> {}", self.descriptor.name(), self.state, next);
        self.state = next;
    }

    fn keys(&self) -> Result<&KeyPair> {
        self.keys
            .as_ref()
            .ok_or_else(|| invalid_state(self.name(), SignatureState::KeysGenerated, self.state))
    }

    /// Generate a key pair and check its lengths against the descriptor
    pub fn generate_keys(&mut self) -> Result<&KeyPair> {
        if self.state != SignatureState::Idle {
            return Err(invalid_state(self.name(), SignatureState::Idle, self.state));
        }

        let keys = self
            .scheme
            .keypair()
            .map_err(|err| Error::from_provider(self.name(), err, Error::keygen))?;

        check_exact_len(self.name(), "public key", keys.public_key().len(), self.descriptor.public_key_len())?;
        check_exact_len(self.name(), "secret key", keys.secret_key().len(), self.descriptor.secret_key_len())?;

        self.transition(SignatureState::KeysGenerated);
        Ok(&*self.keys.insert(keys))
    }

    /// Sign `message` with the current key pair
    pub fn sign(&mut self, message: &[u8]) -> Result<Signature> {
        let keys = self.keys()?;
        let max_len = self.descriptor.signature_len().ok_or_else(|| Error::InvariantViolation {
            algorithm: self.name().to_string(),
            detail: "descriptor declares no signature length".to_string(),
        })?;

        let signature = self
            .scheme
            .sign(message, keys.secret_key())
            .map_err(|err| Error::from_provider(self.name(), err, Error::sign))?;

        if signature.len() > max_len {
            return Err(Error::InvariantViolation {
                algorithm: self.name().to_string(),
                detail: format!("signature is {} bytes, descriptor allows at most {max_len}", signature.len()),
            });
        }

        self.last_message = Some(message.to_vec());
        self.last_signature = Some(signature.clone());
        self.transition(SignatureState::Signed);
        Ok(signature)
    }

    /// Verify the most recent signature against `message`
    pub fn verify(&mut self, message: &[u8]) -> Result<Verification> {
        let signature = self
            .last_signature
            .clone()
            .ok_or_else(|| invalid_state(self.name(), SignatureState::Signed, self.state))?;

        let verification = self.verify_signature(message, &signature)?;
        if verification.is_accepted() {
            self.transition(SignatureState::Verified);
        }
        Ok(verification)
    }

    /// Verify an arbitrary signature against `message` with the current
    /// public key. Does not change the harness state.
    pub fn verify_signature(&self, message: &[u8], signature: &Signature) -> Result<Verification> {
        let keys = self.keys()?;
        let accepted = self
            .scheme
            .verify(message, signature, keys.public_key())
            .map_err(|err| Error::from_provider(self.name(), err, Error::verify))?;

        Ok(if accepted {
            Verification::Accepted
        } else {
            Verification::Rejected
        })
    }

    /// Check that the most recent signature does not verify against
    /// `tampered`. Rejection is the expected outcome and returns `Ok`.
    pub fn verify_tamper_rejected(&self, tampered: &[u8]) -> Result<()> {
        let (Some(signed), Some(signature)) = (&self.last_message, &self.last_signature) else {
            return Err(invalid_state(self.name(), SignatureState::Signed, self.state));
        };

        if signed.as_slice() == tampered {
            return Err(Error::IdenticalTamperInput {
                algorithm: self.name().to_string(),
            });
        }

        match self.verify_signature(tampered, signature)? {
            Verification::Rejected => Ok(()),
            Verification::Accepted => {
                log::warn!("{}: signature verified against a tampered message", self.name());
                Err(Error::TamperAcceptedAnomaly {
                    algorithm: self.name().to_string(),
                })
            }
        }
    }
}

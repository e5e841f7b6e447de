/*!
Error handling for the PQC harness.

Two layers of errors exist. [`ProviderError`] is what a cryptographic
backend reports for a single primitive call. [`Error`] is what the harness
surfaces to its callers: it names the stage that failed, the algorithm it
failed for, and keeps the provider error as its source.

Rejection of a tampered input is not an error. Only the cases where the
harness observed something wrong (a failing stage, a size mismatch, an
accepted forgery, disagreeing shared secrets) become [`Error`] values.
*/

use thiserror::Error;

use crate::core::crypto::types::AlgorithmKind;

/// Result type for the PQC harness
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for provider calls
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Error reported by a cryptographic provider for one primitive call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The native operation failed
    #[error("{operation} failed: {reason}")]
    OperationFailed {
        operation: &'static str,
        reason: String,
    },

    /// The provider could not parse an input it was handed
    #[error("malformed {what}: {reason}")]
    MalformedInput { what: &'static str, reason: String },

    /// A buffer for provider output could not be allocated
    #[error("could not allocate {requested} bytes for {what}")]
    Allocation { what: &'static str, requested: usize },
}

impl ProviderError {
    /// Create an OperationFailed error
    pub fn operation_failed(operation: &'static str, reason: impl Into<String>) -> Self {
        ProviderError::OperationFailed {
            operation,
            reason: reason.into(),
        }
    }

    /// Create a MalformedInput error
    pub fn malformed(what: &'static str, reason: impl Into<String>) -> Self {
        ProviderError::MalformedInput {
            what,
            reason: reason.into(),
        }
    }
}

/// Error type for the PQC harness
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Unknown algorithm name, or an algorithm compiled out of this build
    #[error("Algorithm {name} is not available")]
    AlgorithmUnavailable { name: String },

    /// The algorithm exists but has the wrong shape for the requested harness
    #[error("Algorithm {name} is a {actual} algorithm, expected {expected}")]
    KindMismatch {
        name: String,
        expected: AlgorithmKind,
        actual: AlgorithmKind,
    },

    /// A buffer sized from the descriptor could not be allocated
    #[error("Could not allocate {requested} bytes for {what} ({algorithm})")]
    AllocationFailure {
        algorithm: String,
        what: &'static str,
        requested: usize,
    },

    /// Key generation failed
    #[error("Key generation failed for {algorithm}")]
    KeygenFailure {
        algorithm: String,
        #[source]
        source: ProviderError,
    },

    /// Signing failed
    #[error("Signing failed for {algorithm}")]
    SignFailure {
        algorithm: String,
        #[source]
        source: ProviderError,
    },

    /// The provider failed to run verification at all
    #[error("Verification could not be performed for {algorithm}")]
    VerifyFailure {
        algorithm: String,
        #[source]
        source: ProviderError,
    },

    /// Encapsulation failed
    #[error("Encapsulation failed for {algorithm}")]
    EncapsulationFailure {
        algorithm: String,
        #[source]
        source: ProviderError,
    },

    /// Decapsulation failed
    #[error("Decapsulation failed for {algorithm}")]
    DecapsulationFailure {
        algorithm: String,
        #[source]
        source: ProviderError,
    },

    /// Provider output does not match the sizes its descriptor declares
    #[error("Invariant violated for {algorithm}: {detail}")]
    InvariantViolation { algorithm: String, detail: String },

    /// A stage was invoked out of order
    #[error("{algorithm} harness not in correct state: expected {expected}, but was {actual}")]
    InvalidState {
        algorithm: String,
        expected: String,
        actual: String,
    },

    /// A signature over untampered data was rejected
    #[error("Signature over the original message was rejected by {algorithm}")]
    UnexpectedRejection { algorithm: String },

    /// Encapsulator and decapsulator derived different shared secrets
    #[error("Shared secrets do not match for {algorithm}")]
    SharedSecretMismatch { algorithm: String },

    /// A tampered input was accepted
    #[error("SECURITY: tampered input was accepted by {algorithm}")]
    TamperAcceptedAnomaly { algorithm: String },

    /// The tamper check was handed the very message that was signed
    #[error("Tamper check for {algorithm} needs a message different from the signed one")]
    IdenticalTamperInput { algorithm: String },
}

/// Coarse grouping of [`Error`] kinds, used to decide how a run proceeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The algorithm cannot be run here; callers should list alternatives
    Unavailable,
    /// A stage failed; the algorithm's workflow stops, others continue
    OperationFailure,
    /// Harness or provider broke a size or ordering contract
    ContractViolation,
    /// Correctness or security finding; always reported, never aborts the run
    Finding,
}

impl Error {
    /// Classify this error
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::AlgorithmUnavailable { .. } | Error::KindMismatch { .. } => ErrorClass::Unavailable,
            Error::AllocationFailure { .. }
            | Error::KeygenFailure { .. }
            | Error::SignFailure { .. }
            | Error::VerifyFailure { .. }
            | Error::EncapsulationFailure { .. }
            | Error::DecapsulationFailure { .. }
            | Error::UnexpectedRejection { .. } => ErrorClass::OperationFailure,
            Error::InvariantViolation { .. }
            | Error::InvalidState { .. }
            | Error::IdenticalTamperInput { .. } => ErrorClass::ContractViolation,
            Error::SharedSecretMismatch { .. } | Error::TamperAcceptedAnomaly { .. } => ErrorClass::Finding,
        }
    }

    /// Whether this error is a correctness or security finding
    pub fn is_finding(&self) -> bool {
        self.class() == ErrorClass::Finding
    }

    /// The algorithm this error refers to
    pub fn algorithm(&self) -> &str {
        match self {
            Error::AlgorithmUnavailable { name } | Error::KindMismatch { name, .. } => name,
            Error::AllocationFailure { algorithm, .. }
            | Error::KeygenFailure { algorithm, .. }
            | Error::SignFailure { algorithm, .. }
            | Error::VerifyFailure { algorithm, .. }
            | Error::EncapsulationFailure { algorithm, .. }
            | Error::DecapsulationFailure { algorithm, .. }
            | Error::InvariantViolation { algorithm, .. }
            | Error::InvalidState { algorithm, .. }
            | Error::UnexpectedRejection { algorithm }
            | Error::SharedSecretMismatch { algorithm }
            | Error::TamperAcceptedAnomaly { algorithm }
            | Error::IdenticalTamperInput { algorithm } => algorithm,
        }
    }

    /// Map a provider error from a stage to the harness error for that stage.
    ///
    /// Allocation problems keep their own kind regardless of stage.
    pub(crate) fn from_provider(
        algorithm: &str,
        source: ProviderError,
        stage: fn(String, ProviderError) -> Error,
    ) -> Error {
        match source {
            ProviderError::Allocation { what, requested } => Error::AllocationFailure {
                algorithm: algorithm.to_string(),
                what,
                requested,
            },
            other => stage(algorithm.to_string(), other),
        }
    }

    pub(crate) fn keygen(algorithm: String, source: ProviderError) -> Error {
        Error::KeygenFailure { algorithm, source }
    }

    pub(crate) fn sign(algorithm: String, source: ProviderError) -> Error {
        Error::SignFailure { algorithm, source }
    }

    pub(crate) fn verify(algorithm: String, source: ProviderError) -> Error {
        Error::VerifyFailure { algorithm, source }
    }

    pub(crate) fn encapsulation(algorithm: String, source: ProviderError) -> Error {
        Error::EncapsulationFailure { algorithm, source }
    }

    pub(crate) fn decapsulation(algorithm: String, source: ProviderError) -> Error {
        Error::DecapsulationFailure { algorithm, source }
    }
}

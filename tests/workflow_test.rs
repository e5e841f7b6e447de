//! End-to-end runs, including providers that misbehave on purpose.

use std::sync::Arc;

use pqc_harness::{
    AlgorithmDescriptor, AlgorithmFamily, AlgorithmRegistry, Ciphertext, Encapsulation, Error, HarnessConfig,
    KemScheme, KeyPair, MemorySink, ProviderError, ProviderResult, ReportEvent, SecretBytes, SharedSecret,
    Signature, SignatureScheme, StageStatus, Workflow, WorkflowStep,
};

// ----- Fault-Injecting Providers -----

/// Signs by echoing the message length; can be told to accept anything
struct EchoSignature {
    descriptor: AlgorithmDescriptor,
    accept_all: bool,
    public_key_len: usize,
}

impl EchoSignature {
    fn new(name: &str) -> Self {
        Self {
            descriptor: AlgorithmDescriptor::signature(name, AlgorithmFamily::Custom, 4, 4, 8),
            accept_all: false,
            public_key_len: 4,
        }
    }

    fn accepting(name: &str) -> Self {
        Self {
            accept_all: true,
            ..Self::new(name)
        }
    }

    fn short_key(name: &str) -> Self {
        Self {
            public_key_len: 3,
            ..Self::new(name)
        }
    }

    fn tag(message: &[u8]) -> Vec<u8> {
        let mut tag = (message.len() as u64).to_le_bytes();
        for (i, byte) in message.iter().enumerate() {
            tag[i % 8] ^= byte;
        }
        tag.to_vec()
    }
}

impl SignatureScheme for EchoSignature {
    fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    fn keypair(&self) -> ProviderResult<KeyPair> {
        Ok(KeyPair::new(vec![1; self.public_key_len], SecretBytes::new(vec![2; 4])))
    }

    fn sign(&self, message: &[u8], _secret_key: &SecretBytes) -> ProviderResult<Signature> {
        Ok(Signature::new(Self::tag(message)))
    }

    fn verify(&self, message: &[u8], signature: &Signature, _public_key: &[u8]) -> ProviderResult<bool> {
        Ok(self.accept_all || signature.as_bytes() == Self::tag(message).as_slice())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum KemBehaviour {
    Honest,
    Disagree,
    FailDecapsulate,
}

/// Shared secret is the ciphertext itself
struct MirrorKem {
    descriptor: AlgorithmDescriptor,
    behaviour: KemBehaviour,
}

impl MirrorKem {
    fn new(name: &str, behaviour: KemBehaviour) -> Self {
        Self {
            descriptor: AlgorithmDescriptor::kem(name, AlgorithmFamily::Custom, 4, 4, 16, 16),
            behaviour,
        }
    }
}

impl KemScheme for MirrorKem {
    fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    fn keypair(&self) -> ProviderResult<KeyPair> {
        Ok(KeyPair::new(vec![3; 4], SecretBytes::new(vec![4; 4])))
    }

    fn encapsulate(&self, _public_key: &[u8]) -> ProviderResult<Encapsulation> {
        let bytes: Vec<u8> = (0..16).collect();
        Ok(Encapsulation {
            ciphertext: Ciphertext::new(bytes.clone()),
            shared_secret: SecretBytes::new(bytes),
        })
    }

    fn decapsulate(&self, ciphertext: &Ciphertext, _secret_key: &SecretBytes) -> ProviderResult<SharedSecret> {
        match self.behaviour {
            KemBehaviour::Honest => Ok(SecretBytes::new(ciphertext.as_bytes().to_vec())),
            KemBehaviour::Disagree => Ok(SecretBytes::new(vec![0; 16])),
            KemBehaviour::FailDecapsulate => Err(ProviderError::operation_failed("decapsulate", "injected failure")),
        }
    }
}

fn run(registry: &AlgorithmRegistry, names: &[&str]) -> (pqc_harness::RunSummary, MemorySink) {
    let mut workflow = Workflow::new(registry, HarnessConfig::default(), MemorySink::new());
    let summary = workflow.run(names).unwrap();
    (summary, workflow.into_sink())
}

// ----- Anomaly Paths -----

#[test]
fn test_accepting_verifier_is_reported_as_finding() {
    let mut registry = AlgorithmRegistry::new();
    registry.register_signature(Arc::new(EchoSignature::accepting("Lax-Sig")));

    let (summary, sink) = run(&registry, &["Lax-Sig"]);
    let outcome = &summary.outcomes[0];
    assert!(outcome.failure.is_none());
    assert!(!outcome.findings.is_empty());
    assert!(outcome.findings.iter().all(Error::is_finding));
    assert_eq!(summary.exit_code(), 1);

    let tamper = sink
        .stages()
        .find(|s| s.step == WorkflowStep::VerifyTampered)
        .unwrap();
    assert!(tamper.status.is_failed());
}

#[test]
fn test_disagreeing_kem_is_reported_as_finding() {
    let mut registry = AlgorithmRegistry::new();
    registry.register_kem(Arc::new(MirrorKem::new("Bad-KEM", KemBehaviour::Disagree)));

    let (summary, _) = run(&registry, &["Bad-KEM"]);
    assert!(matches!(
        summary.outcomes[0].findings.as_slice(),
        [Error::SharedSecretMismatch { .. }]
    ));
    assert!(!summary.is_success());
}

#[test]
fn test_wrong_key_length_fails_that_algorithm_only() {
    let mut registry = AlgorithmRegistry::new();
    registry.register_signature(Arc::new(EchoSignature::short_key("Short-Sig")));
    registry.register_kem(Arc::new(MirrorKem::new("Good-KEM", KemBehaviour::Honest)));

    let (summary, _) = run(&registry, &["Short-Sig", "Good-KEM"]);
    assert!(matches!(
        summary.outcomes[0].failure,
        Some(Error::InvariantViolation { .. })
    ));
    assert!(summary.outcomes[1].is_clean());
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn test_failing_decapsulation_stops_workflow() {
    let mut registry = AlgorithmRegistry::new();
    registry.register_kem(Arc::new(MirrorKem::new("Flaky-KEM", KemBehaviour::FailDecapsulate)));

    let (summary, sink) = run(&registry, &["Flaky-KEM"]);
    assert!(matches!(
        summary.outcomes[0].failure,
        Some(Error::DecapsulationFailure { .. })
    ));
    assert!(sink.stages().all(|s| s.step != WorkflowStep::VerifyAgreement));
}

// ----- Clean Runs -----

#[test]
fn test_honest_providers_succeed() {
    let mut registry = AlgorithmRegistry::new();
    registry.register_signature(Arc::new(EchoSignature::new("Echo-Sig")));
    registry.register_kem(Arc::new(MirrorKem::new("Mirror-KEM", KemBehaviour::Honest)));

    let (summary, sink) = run(&registry, &["echo-sig", "MIRROR-KEM"]);
    assert!(summary.is_success());
    assert_eq!(summary.exit_code(), 0);

    let started = sink
        .events()
        .iter()
        .filter(|e| matches!(e, ReportEvent::AlgorithmStarted(_)))
        .count();
    assert_eq!(started, 2);
    assert!(
        sink.stages()
            .any(|s| s.step == WorkflowStep::DecapsulateCorrupted && s.status == StageStatus::ExpectedRejection)
    );
}

#[test]
fn test_signature_preview_is_truncated() {
    let mut registry = AlgorithmRegistry::new();
    registry.register_signature(Arc::new(EchoSignature::new("Echo-Sig")));

    let config = HarnessConfig::default().with_preview_bytes(4);
    let mut workflow = Workflow::new(&registry, config, MemorySink::new());
    workflow.run(&["Echo-Sig"]).unwrap();

    let sink = workflow.into_sink();
    let sign = sink.stages().find(|s| s.step == WorkflowStep::Sign).unwrap();
    let preview = sign.preview.as_deref().unwrap();
    assert_eq!(preview.len(), 8 + 3);
    assert!(preview.ends_with("..."));
}

#[test]
fn test_listing_reports_everything() {
    let mut registry = AlgorithmRegistry::new();
    registry.register_signature(Arc::new(EchoSignature::new("Echo-Sig")));
    let mut workflow = Workflow::new(&registry, HarnessConfig::default(), MemorySink::new());

    let listing = workflow.list();
    assert_eq!(listing.len(), 1);
    assert!(listing[0].enabled);
    assert!(matches!(workflow.sink().events(), [ReportEvent::Listing(_)]));
}

// ----- Built-in Providers -----

#[cfg(all(feature = "ml-dsa", feature = "ml-kem"))]
#[test]
fn test_default_run_uses_preferred_algorithm() {
    let mut workflow = Workflow::new(pqc_harness::default_registry(), HarnessConfig::default(), MemorySink::new());
    let summary = workflow.run::<&str>(&[]).unwrap();
    assert_eq!(summary.outcomes.len(), 1);
    assert_eq!(summary.outcomes[0].algorithm, pqc_harness::PREFERRED_ALGORITHMS[0]);
    assert!(summary.is_success(), "{summary:?}");
}

#[cfg(all(feature = "ml-dsa", feature = "ml-kem"))]
#[test]
fn test_builtin_run_with_benchmark() {
    let config = HarnessConfig::default().with_benchmark(true);
    let mut workflow = Workflow::new(pqc_harness::default_registry(), config, MemorySink::new());
    let summary = workflow.run(&["ML-DSA-44", "ML-KEM-768"]).unwrap();
    assert!(summary.is_success(), "{summary:?}");
    assert!(summary.outcomes.iter().all(|o| o.benchmark.as_ref().is_some_and(|b| b.is_complete())));
}

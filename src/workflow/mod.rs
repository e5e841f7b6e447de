/*!
End-to-end harness runs.

A [`Workflow`] resolves algorithm names against a registry, drives the
matching harness through every step, reports each step to a
[`ReportSink`] and condenses the run into a [`RunSummary`].

Names are all resolved before any cryptographic call is made. Once
running, each algorithm is isolated: a failure stops that algorithm's
remaining steps and the next algorithm runs. Findings (an accepted
forgery, disagreeing shared secrets) are recorded and the workflow
carries on.
*/

use crate::bench::{AlgorithmBenchmark, BenchmarkRunner};
use crate::core::config::HarnessConfig;
use crate::core::constants::PREFERRED_ALGORITHMS;
use crate::core::crypto::registry::{AlgorithmListing, AlgorithmRegistry};
use crate::core::crypto::traits::ProviderHandle;
use crate::core::crypto::types::{AlgorithmDescriptor, AlgorithmKind};
use crate::core::error::{Error, Result};
use crate::harness::{KemHarness, SignatureHarness, Verification};
use crate::report::{ReportEvent, ReportSink, StageReport, StageStatus, WorkflowStep, hex_preview};

/// What happened to one algorithm during a run
#[derive(Debug, Clone)]
pub struct AlgorithmOutcome {
    pub algorithm: String,
    pub kind: Option<AlgorithmKind>,
    /// The error that stopped the workflow, if any
    pub failure: Option<Error>,
    /// Findings recorded while the workflow continued
    pub findings: Vec<Error>,
    pub benchmark: Option<AlgorithmBenchmark>,
}

impl AlgorithmOutcome {
    fn new(algorithm: &str, kind: Option<AlgorithmKind>) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            kind,
            failure: None,
            findings: Vec::new(),
            benchmark: None,
        }
    }

    /// Attach a benchmark. A finding it hit joins `findings` once;
    /// any other error becomes the failure.
    fn absorb_benchmark(&mut self, bench: AlgorithmBenchmark) {
        match &bench.error {
            Some(err) if err.is_finding() => {
                let seen = self.findings.iter().any(|f| f.to_string() == err.to_string());
                if !seen {
                    self.findings.push(err.clone());
                }
            }
            Some(err) => self.failure = Some(err.clone()),
            None => {}
        }
        self.benchmark = Some(bench);
    }

    /// Completed with no failure and no finding
    pub fn is_clean(&self) -> bool {
        self.failure.is_none() && self.findings.is_empty()
    }
}

/// Outcomes of every algorithm in a run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<AlgorithmOutcome>,
}

impl RunSummary {
    /// Every algorithm completed with no failure and no finding
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(AlgorithmOutcome::is_clean)
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Number of findings across all algorithms
    pub fn finding_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.findings.len()).sum()
    }

    /// Outcomes that stopped on a failure
    pub fn failures(&self) -> impl Iterator<Item = &AlgorithmOutcome> {
        self.outcomes.iter().filter(|o| o.failure.is_some())
    }
}

/// Drives harness runs against one registry, reporting to one sink
pub struct Workflow<'r, S: ReportSink> {
    registry: &'r AlgorithmRegistry,
    config: HarnessConfig,
    sink: S,
}

impl<'r, S: ReportSink> Workflow<'r, S> {
    pub fn new(registry: &'r AlgorithmRegistry, config: HarnessConfig, sink: S) -> Self {
        Self { registry, config, sink }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Report the registry's algorithms
    pub fn list(&mut self) -> Vec<AlgorithmListing> {
        let listing = self.registry.list();
        self.sink.record(ReportEvent::Listing(listing.clone()));
        listing
    }

    /// Resolve requested names to descriptors.
    ///
    /// With no names, picks the first enabled algorithm of the preferred
    /// order. Any unknown or disabled name fails the whole request.
    pub fn resolve<N: AsRef<str>>(&self, names: &[N]) -> Result<Vec<AlgorithmDescriptor>> {
        if names.is_empty() {
            return self
                .registry
                .first_enabled(PREFERRED_ALGORITHMS)
                .map(|descriptor| vec![descriptor])
                .ok_or_else(|| Error::AlgorithmUnavailable {
                    name: PREFERRED_ALGORITHMS.join(", "),
                });
        }

        names.iter().map(|name| self.registry.describe(name.as_ref())).collect()
    }

    /// Run the full workflow for every requested algorithm
    pub fn run<N: AsRef<str>>(&mut self, names: &[N]) -> Result<RunSummary> {
        let descriptors = self.resolve(names)?;
        let outcomes = descriptors
            .iter()
            .map(|descriptor| self.run_algorithm(descriptor.name()))
            .collect();
        Ok(RunSummary { outcomes })
    }

    /// Only time the requested algorithms, or every enabled one
    pub fn bench<N: AsRef<str>>(&mut self, names: &[N]) -> Result<RunSummary> {
        let descriptors = if names.is_empty() {
            self.registry.enabled()
        } else {
            self.resolve(names)?
        };

        let runner = BenchmarkRunner::new(self.registry).with_message(self.config.benchmark_message.clone());
        let mut outcomes = Vec::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            let bench = runner.run(descriptor.name());
            self.sink.record(ReportEvent::Benchmark(bench.clone()));

            let mut outcome = AlgorithmOutcome::new(descriptor.name(), Some(descriptor.kind()));
            outcome.absorb_benchmark(bench);
            outcomes.push(outcome);
        }
        Ok(RunSummary { outcomes })
    }

    /// Run the full workflow for one algorithm
    pub fn run_algorithm(&mut self, name: &str) -> AlgorithmOutcome {
        let provider = match self.registry.provider(name) {
            Ok(provider) => provider.clone(),
            Err(err) => {
                let mut outcome = AlgorithmOutcome::new(name, None);
                outcome.failure = Some(err);
                self.finish(&outcome);
                return outcome;
            }
        };

        let descriptor = provider.descriptor().clone();
        let algorithm = descriptor.name().to_string();
        log::info!("Running {} workflow for {algorithm}", descriptor.kind());
        self.sink.record(ReportEvent::AlgorithmStarted(descriptor.clone()));

        let mut outcome = AlgorithmOutcome::new(&algorithm, Some(descriptor.kind()));
        let result = match provider {
            ProviderHandle::Signature(scheme) => {
                self.run_signature(SignatureHarness::new(scheme), &mut outcome.findings)
            }
            ProviderHandle::Kem(scheme) => self.run_kem(KemHarness::new(scheme), &mut outcome.findings),
        };
        outcome.failure = result.err();

        if self.config.benchmark && outcome.failure.is_none() {
            let bench = BenchmarkRunner::new(self.registry)
                .with_message(self.config.benchmark_message.clone())
                .run(&algorithm);
            self.sink.record(ReportEvent::Benchmark(bench.clone()));
            outcome.absorb_benchmark(bench);
        }

        self.finish(&outcome);
        outcome
    }

    fn finish(&mut self, outcome: &AlgorithmOutcome) {
        self.sink.record(ReportEvent::AlgorithmFinished {
            algorithm: outcome.algorithm.clone(),
            failure: outcome.failure.clone(),
            findings: outcome.findings.clone(),
        });
    }

    fn emit(&mut self, report: StageReport) {
        self.sink.record(ReportEvent::Stage(report));
    }

    /// Report a failed step and hand back its value or error
    fn check<T>(&mut self, algorithm: &str, step: WorkflowStep, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            log::warn!("{algorithm}: {step} failed: {err}");
            self.emit(StageReport::new(algorithm, step, StageStatus::Failed(err.to_string())));
        }
        result
    }

    /// Report a step whose success is a rejection. Findings are recorded
    /// and the workflow continues; any other error stops it.
    fn expect_rejection(
        &mut self,
        algorithm: &str,
        step: WorkflowStep,
        result: Result<()>,
        findings: &mut Vec<Error>,
    ) -> Result<()> {
        match result {
            Ok(()) => {
                self.emit(StageReport::new(algorithm, step, StageStatus::ExpectedRejection));
                Ok(())
            }
            Err(err) if err.is_finding() => {
                log::warn!("{algorithm}: {step}: {err}");
                self.emit(StageReport::new(algorithm, step, StageStatus::Failed(err.to_string())));
                findings.push(err);
                Ok(())
            }
            Err(err) => self.check(algorithm, step, Err(err)),
        }
    }

    fn run_signature(&mut self, mut harness: SignatureHarness, findings: &mut Vec<Error>) -> Result<()> {
        let algorithm = harness.descriptor().name().to_string();
        let preview = self.config.preview_bytes;
        let message = self.config.message.clone();

        let keys = harness.generate_keys();
        let keys = self.check(&algorithm, WorkflowStep::GenerateKeys, keys)?;
        let report = StageReport::new(&algorithm, WorkflowStep::GenerateKeys, StageStatus::Passed)
            .with_length("public key", keys.public_key().len())
            .with_length("secret key", keys.secret_key().len())
            .with_preview(hex_preview(keys.public_key(), preview));
        self.emit(report);

        let signature = harness.sign(&message);
        let signature = self.check(&algorithm, WorkflowStep::Sign, signature)?;
        self.emit(
            StageReport::new(&algorithm, WorkflowStep::Sign, StageStatus::Passed)
                .with_length("message", message.len())
                .with_length("signature", signature.len())
                .with_preview(hex_preview(signature.as_bytes(), preview)),
        );

        let verified = harness.verify(&message).and_then(|v| v.require_accepted(&algorithm));
        self.check(&algorithm, WorkflowStep::Verify, verified)?;
        self.emit(StageReport::new(&algorithm, WorkflowStep::Verify, StageStatus::Passed));

        let tampered = self.config.tampered_for(&message);
        let rejected = harness.verify_tamper_rejected(&tampered);
        self.expect_rejection(&algorithm, WorkflowStep::VerifyTampered, rejected, findings)?;

        if !self.config.multi_message {
            return Ok(());
        }
        let second = self.config.second_message.clone();
        if second == message {
            log::debug!("{algorithm}: second message equals the first, skipping cross-message check");
            return Ok(());
        }

        let second_signature = harness.sign(&second);
        let second_signature = self.check(&algorithm, WorkflowStep::SignSecond, second_signature)?;
        let second_verified = harness.verify(&second).and_then(|v| v.require_accepted(&algorithm));
        self.check(&algorithm, WorkflowStep::SignSecond, second_verified)?;
        self.emit(
            StageReport::new(&algorithm, WorkflowStep::SignSecond, StageStatus::Passed)
                .with_length("message", second.len())
                .with_length("signature", second_signature.len())
                .with_preview(hex_preview(second_signature.as_bytes(), preview)),
        );

        // The first signature must still verify, and neither may cover the
        // other message.
        let first_still_valid = harness
            .verify_signature(&message, &signature)
            .and_then(|v| v.require_accepted(&algorithm));
        self.check(&algorithm, WorkflowStep::CrossVerify, first_still_valid)?;

        let crossed = [(&second, &signature), (&message, &second_signature)]
            .into_iter()
            .map(|(msg, sig)| harness.verify_signature(msg, sig))
            .collect::<Result<Vec<_>>>();
        let crossed = self.check(&algorithm, WorkflowStep::CrossVerify, crossed)?;
        let result = if crossed.contains(&Verification::Accepted) {
            Err(Error::TamperAcceptedAnomaly {
                algorithm: algorithm.clone(),
            })
        } else {
            Ok(())
        };
        self.expect_rejection(&algorithm, WorkflowStep::CrossVerify, result, findings)
    }

    fn run_kem(&mut self, mut harness: KemHarness, findings: &mut Vec<Error>) -> Result<()> {
        let algorithm = harness.descriptor().name().to_string();
        let preview = self.config.preview_bytes;

        let keys = harness.generate_keys();
        let keys = self.check(&algorithm, WorkflowStep::GenerateKeys, keys)?;
        let report = StageReport::new(&algorithm, WorkflowStep::GenerateKeys, StageStatus::Passed)
            .with_length("public key", keys.public_key().len())
            .with_length("secret key", keys.secret_key().len())
            .with_preview(hex_preview(keys.public_key(), preview));
        self.emit(report);

        let ciphertext = harness.encapsulate();
        let ciphertext = self.check(&algorithm, WorkflowStep::Encapsulate, ciphertext)?;
        let mut report = StageReport::new(&algorithm, WorkflowStep::Encapsulate, StageStatus::Passed)
            .with_length("ciphertext", ciphertext.len())
            .with_preview(hex_preview(ciphertext.as_bytes(), preview));
        if let Some(secret) = harness.encapsulated_secret() {
            report = report.with_length("shared secret", secret.len());
        }
        self.emit(report);

        let secret = harness.decapsulate();
        let secret = self.check(&algorithm, WorkflowStep::Decapsulate, secret)?;
        let report = StageReport::new(&algorithm, WorkflowStep::Decapsulate, StageStatus::Passed)
            .with_length("shared secret", secret.len());
        self.emit(report);

        match harness.verify_agreement() {
            Ok(()) => self.emit(StageReport::new(&algorithm, WorkflowStep::VerifyAgreement, StageStatus::Passed)),
            Err(err) if err.is_finding() => {
                log::warn!("{algorithm}: {err}");
                self.emit(StageReport::new(
                    &algorithm,
                    WorkflowStep::VerifyAgreement,
                    StageStatus::Failed(err.to_string()),
                ));
                findings.push(err);
            }
            Err(err) => return self.check(&algorithm, WorkflowStep::VerifyAgreement, Err(err)),
        }

        if self.config.kem_tamper_check {
            let rejected = harness.verify_tamper_rejected();
            self.expect_rejection(&algorithm, WorkflowStep::DecapsulateCorrupted, rejected, findings)?;
        }
        Ok(())
    }
}

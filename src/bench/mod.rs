/*!
Per-stage timing of algorithms.

Each algorithm is timed over one key generation, one operation (sign or
encapsulate) and one verification (verify or decapsulate) with the
monotonic clock. A failing stage stops that algorithm; the others still
run.
*/

use std::fmt;
use std::time::{Duration, Instant};

use crate::core::constants::messages;
use crate::core::crypto::registry::AlgorithmRegistry;
use crate::core::crypto::traits::ProviderHandle;
use crate::core::crypto::types::AlgorithmKind;
use crate::core::error::{Error, Result};
use crate::harness::{KemHarness, SignatureHarness};

/// The timed stages, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BenchmarkStage {
    KeyGen,
    Operation,
    Verify,
}

impl BenchmarkStage {
    /// Stage name as it applies to an algorithm kind
    pub fn label(self, kind: AlgorithmKind) -> &'static str {
        match (self, kind) {
            (BenchmarkStage::KeyGen, _) => "keygen",
            (BenchmarkStage::Operation, AlgorithmKind::Signature) => "sign",
            (BenchmarkStage::Operation, AlgorithmKind::Kem) => "encapsulate",
            (BenchmarkStage::Verify, AlgorithmKind::Signature) => "verify",
            (BenchmarkStage::Verify, AlgorithmKind::Kem) => "decapsulate",
        }
    }
}

/// Timing of one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub algorithm: String,
    pub kind: AlgorithmKind,
    pub stage: BenchmarkStage,
    pub elapsed: Duration,
}

impl BenchmarkResult {
    pub fn label(&self) -> &'static str {
        self.stage.label(self.kind)
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {:.3} ms",
            self.algorithm,
            self.label(),
            self.elapsed.as_secs_f64() * 1000.0
        )
    }
}

/// Timings gathered for one algorithm, up to the first failing stage
#[derive(Debug, Clone)]
pub struct AlgorithmBenchmark {
    pub algorithm: String,
    pub results: Vec<BenchmarkResult>,
    pub error: Option<Error>,
}

impl AlgorithmBenchmark {
    fn new(algorithm: &str) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            results: Vec::new(),
            error: None,
        }
    }

    fn failed(algorithm: &str, error: Error) -> Self {
        Self {
            error: Some(error),
            ..Self::new(algorithm)
        }
    }

    /// Whether every stage ran
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.results.len() == 3
    }

    /// Sum of all recorded stage timings
    pub fn total(&self) -> Duration {
        self.results.iter().map(|r| r.elapsed).sum()
    }

    /// Time `op` as `stage`. Returns `None` and records the error on failure.
    fn time<T>(&mut self, kind: AlgorithmKind, stage: BenchmarkStage, op: impl FnOnce() -> Result<T>) -> Option<T> {
        let start = Instant::now();
        let outcome = op();
        let elapsed = start.elapsed();

        match outcome {
            Ok(value) => {
                self.results.push(BenchmarkResult {
                    algorithm: self.algorithm.clone(),
                    kind,
                    stage,
                    elapsed,
                });
                Some(value)
            }
            Err(err) => {
                log::warn!("{}: benchmark stopped at {}: {err}", self.algorithm, stage.label(kind));
                self.error = Some(err);
                None
            }
        }
    }
}

/// Times algorithms resolved through a registry
pub struct BenchmarkRunner<'r> {
    registry: &'r AlgorithmRegistry,
    message: Vec<u8>,
}

impl<'r> BenchmarkRunner<'r> {
    /// Create a runner that signs the default benchmark message
    pub fn new(registry: &'r AlgorithmRegistry) -> Self {
        Self {
            registry,
            message: messages::BENCHMARK.as_bytes().to_vec(),
        }
    }

    /// Set the message signed by signature benchmarks
    pub fn with_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.message = message.into();
        self
    }

    /// Time one algorithm
    pub fn run(&self, name: &str) -> AlgorithmBenchmark {
        let provider = match self.registry.provider(name) {
            Ok(provider) => provider.clone(),
            Err(err) => return AlgorithmBenchmark::failed(name, err),
        };

        match provider {
            ProviderHandle::Signature(scheme) => self.run_signature(SignatureHarness::new(scheme)),
            ProviderHandle::Kem(scheme) => Self::run_kem(KemHarness::new(scheme)),
        }
    }

    /// Time several algorithms; a failure in one does not affect the rest
    pub fn run_all<S: AsRef<str>>(&self, names: &[S]) -> Vec<AlgorithmBenchmark> {
        names.iter().map(|name| self.run(name.as_ref())).collect()
    }

    /// Time every enabled algorithm
    pub fn run_enabled(&self) -> Vec<AlgorithmBenchmark> {
        self.registry
            .enabled()
            .iter()
            .map(|descriptor| self.run(descriptor.name()))
            .collect()
    }

    fn run_signature(&self, mut harness: SignatureHarness) -> AlgorithmBenchmark {
        let name = harness.descriptor().name().to_string();
        let kind = AlgorithmKind::Signature;
        let mut bench = AlgorithmBenchmark::new(&name);

        if bench
            .time(kind, BenchmarkStage::KeyGen, || harness.generate_keys().map(|_| ()))
            .is_none()
        {
            return bench;
        }
        if bench
            .time(kind, BenchmarkStage::Operation, || harness.sign(&self.message))
            .is_none()
        {
            return bench;
        }
        bench.time(kind, BenchmarkStage::Verify, || {
            harness.verify(&self.message)?.require_accepted(&name)
        });
        bench
    }

    fn run_kem(mut harness: KemHarness) -> AlgorithmBenchmark {
        let name = harness.descriptor().name().to_string();
        let kind = AlgorithmKind::Kem;
        let mut bench = AlgorithmBenchmark::new(&name);

        if bench
            .time(kind, BenchmarkStage::KeyGen, || harness.generate_keys().map(|_| ()))
            .is_none()
        {
            return bench;
        }
        if bench
            .time(kind, BenchmarkStage::Operation, || harness.encapsulate().map(|_| ()))
            .is_none()
        {
            return bench;
        }
        if bench
            .time(kind, BenchmarkStage::Verify, || harness.decapsulate().map(|_| ()))
            .is_none()
        {
            return bench;
        }
        if let Err(err) = harness.verify_agreement() {
            bench.error = Some(err);
        }
        bench
    }
}

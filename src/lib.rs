/*!
# PQC Harness

A harness for exercising post-quantum cryptographic primitives through one
workflow: discover algorithms, generate keys, run the primitive, validate
correctness and tamper robustness, and optionally time each stage.

## Overview

This library provides:

- An algorithm registry covering ML-DSA (CRYSTALS-Dilithium), SLH-DSA
  (SPHINCS+), Falcon and ML-KEM (CRYSTALS-Kyber), with legacy name aliases
- A provider interface ([`SignatureScheme`], [`KemScheme`]) for plugging in
  other backends
- Staged harnesses that check every provider output against the
  algorithm's declared sizes
- Tamper checks that distinguish an expected rejection from a security
  finding
- Per-stage benchmarking with failure isolation per algorithm
- Structured reporting through a [`ReportSink`]; the library never prints

Each algorithm family sits behind a cargo feature (`ml-dsa`, `slh-dsa`,
`falcon`, `ml-kem`). Families compiled out are still listed, as disabled.

## Example

```no_run
use pqc_harness::{HarnessConfig, LogSink, Workflow, default_registry};

let mut workflow = Workflow::new(default_registry(), HarnessConfig::default(), LogSink);
let summary = workflow.run(&["ML-DSA-44", "ML-KEM-768"])?;
std::process::exit(i32::from(summary.exit_code()));
# Ok::<(), pqc_harness::Error>(())
```

## Secret handling

Secret keys and shared secrets are held in [`SecretBytes`], which is wiped
on drop and redacted from `Debug` output. Shared secrets are compared in
constant time.
*/

// Core harness components
pub mod core;

// Staged workflows
pub mod harness;

// Timing
pub mod bench;

// Structured reporting
pub mod report;

// End-to-end runs
pub mod workflow;

// Re-export commonly used types for convenience
pub use crate::core::config::HarnessConfig;
pub use crate::core::constants::{DEFAULT_PREVIEW_BYTES, PREFERRED_ALGORITHMS, VERSION};
pub use crate::core::crypto::registry::{AlgorithmListing, AlgorithmRegistry, default_registry};
pub use crate::core::crypto::traits::{KemScheme, ProviderHandle, SignatureScheme};
pub use crate::core::crypto::types::{
    AlgorithmDescriptor, AlgorithmFamily, AlgorithmKind, Ciphertext, Encapsulation, KeyPair, OutputLengths,
    SharedSecret, Signature,
};
pub use crate::core::error::{Error, ErrorClass, ProviderError, ProviderResult, Result};
pub use crate::core::memory::SecretBytes;
pub use crate::core::security::constant_time_eq;

pub use bench::{AlgorithmBenchmark, BenchmarkResult, BenchmarkRunner, BenchmarkStage};
pub use harness::{KemHarness, KemState, SignatureHarness, SignatureState, Verification};
pub use report::{
    ByteLength, LogSink, MemorySink, ReportEvent, ReportSink, StageReport, StageStatus, WorkflowStep, hex_preview,
};
pub use workflow::{AlgorithmOutcome, RunSummary, Workflow};

/*!
Structured reporting.

Harness runs describe what happened as [`ReportEvent`]s handed to a
[`ReportSink`]. The library never prints; rendering for humans belongs to
whichever sink the caller installs.
*/

use std::fmt;

use crate::bench::AlgorithmBenchmark;
use crate::core::crypto::registry::AlgorithmListing;
use crate::core::crypto::types::AlgorithmDescriptor;
use crate::core::error::Error;

/// One step of a harness workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStep {
    GenerateKeys,
    Sign,
    Verify,
    VerifyTampered,
    SignSecond,
    CrossVerify,
    Encapsulate,
    Decapsulate,
    VerifyAgreement,
    DecapsulateCorrupted,
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkflowStep::GenerateKeys => "key generation",
            WorkflowStep::Sign => "signing",
            WorkflowStep::Verify => "verification",
            WorkflowStep::VerifyTampered => "tampered message verification",
            WorkflowStep::SignSecond => "second message signing",
            WorkflowStep::CrossVerify => "cross-message verification",
            WorkflowStep::Encapsulate => "encapsulation",
            WorkflowStep::Decapsulate => "decapsulation",
            WorkflowStep::VerifyAgreement => "shared secret agreement",
            WorkflowStep::DecapsulateCorrupted => "corrupted ciphertext decapsulation",
        };
        f.write_str(label)
    }
}

/// How a step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageStatus {
    /// The step produced the expected result
    Passed,
    /// Tampered data was rejected, which is the expected outcome
    ExpectedRejection,
    /// The step failed or produced a finding
    Failed(String),
}

impl StageStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, StageStatus::Failed(_))
    }
}

/// A labelled byte length reported for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteLength {
    pub label: &'static str,
    pub len: usize,
}

/// Result of one workflow step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub algorithm: String,
    pub step: WorkflowStep,
    pub status: StageStatus,
    pub lengths: Vec<ByteLength>,
    /// Hex preview of the step's public output
    pub preview: Option<String>,
}

impl StageReport {
    pub fn new(algorithm: &str, step: WorkflowStep, status: StageStatus) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            step,
            status,
            lengths: Vec::new(),
            preview: None,
        }
    }

    pub fn with_length(mut self, label: &'static str, len: usize) -> Self {
        self.lengths.push(ByteLength { label, len });
        self
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.preview = Some(preview);
        self
    }
}

/// Something a harness run wants reported
#[derive(Debug, Clone)]
pub enum ReportEvent {
    /// The registry's known algorithms
    Listing(Vec<AlgorithmListing>),
    /// A workflow is about to run
    AlgorithmStarted(AlgorithmDescriptor),
    /// A workflow step ended
    Stage(StageReport),
    /// Timings for one algorithm
    Benchmark(AlgorithmBenchmark),
    /// A workflow ended
    AlgorithmFinished {
        algorithm: String,
        failure: Option<Error>,
        findings: Vec<Error>,
    },
}

/// Receiver of report events
pub trait ReportSink {
    fn record(&mut self, event: ReportEvent);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn record(&mut self, event: ReportEvent) {
        (**self).record(event);
    }
}

/// Sink that forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn record(&mut self, event: ReportEvent) {
        match event {
            ReportEvent::Listing(listing) => {
                for item in listing {
                    log::info!(
                        "{} ({}, {}): {}",
                        item.descriptor.name(),
                        item.descriptor.family(),
                        item.descriptor.kind(),
                        if item.enabled { "enabled" } else { "disabled" }
                    );
                }
            }
            ReportEvent::AlgorithmStarted(descriptor) => {
                log::info!("Running {} ({})", descriptor.name(), descriptor.kind());
            }
            ReportEvent::Stage(stage) => match &stage.status {
                StageStatus::Passed => log::info!("{}: {} passed", stage.algorithm, stage.step),
                StageStatus::ExpectedRejection => {
                    log::info!("{}: {} rejected as expected", stage.algorithm, stage.step)
                }
                StageStatus::Failed(reason) => log::warn!("{}: {} failed: {reason}", stage.algorithm, stage.step),
            },
            ReportEvent::Benchmark(bench) => {
                for result in &bench.results {
                    log::info!("{result}");
                }
            }
            ReportEvent::AlgorithmFinished {
                algorithm,
                failure,
                findings,
            } => match failure {
                Some(err) => log::warn!("{algorithm} did not complete: {err}"),
                None if findings.is_empty() => log::info!("{algorithm} completed"),
                None => log::warn!("{algorithm} completed with {} finding(s)", findings.len()),
            },
        }
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Vec<ReportEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ReportEvent> {
        self.events
    }

    /// Recorded stage reports, in order
    pub fn stages(&self) -> impl Iterator<Item = &StageReport> {
        self.events.iter().filter_map(|event| match event {
            ReportEvent::Stage(stage) => Some(stage),
            _ => None,
        })
    }
}

impl ReportSink for MemorySink {
    fn record(&mut self, event: ReportEvent) {
        self.events.push(event);
    }
}

/// Lowercase hex of at most `limit` bytes, with `...` appended when
/// `bytes` is longer
pub fn hex_preview(bytes: &[u8], limit: usize) -> String {
    if bytes.len() > limit {
        format!("{}...", hex::encode(&bytes[..limit]))
    } else {
        hex::encode(bytes)
    }
}

//! Command-line front end for the PQC harness.
//!
//! Renders harness events as text on stdout. Diagnostics go through
//! `tracing-subscriber`; set `RUST_LOG` to change the level.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pqc_harness::{
    AlgorithmDescriptor, AlgorithmFamily, AlgorithmListing, DEFAULT_PREVIEW_BYTES, Error, HarnessConfig,
    OutputLengths, ReportEvent, ReportSink, RunSummary, StageReport, StageStatus, Workflow, default_registry,
};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "pqc-harness", version, about = "Exercise post-quantum signature schemes and KEMs")]
struct Cli {
    /// Number of bytes shown in hex previews
    #[arg(long, global = true, value_name = "BYTES", default_value_t = DEFAULT_PREVIEW_BYTES)]
    preview_bytes: usize,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List known algorithms and whether this build supports them
    List {
        /// Only show one family (ml-dsa, slh-dsa, falcon, ml-kem)
        #[arg(long, value_name = "FAMILY")]
        family: Option<AlgorithmFamily>,
        /// Hide algorithms compiled out of this build
        #[arg(long)]
        enabled_only: bool,
    },
    /// Run the full workflow for each algorithm
    Run {
        /// Algorithm names or aliases; defaults to the first enabled preferred algorithm
        algorithms: Vec<String>,
        /// Message to sign
        #[arg(long)]
        message: Option<String>,
        /// Message expected to fail verification
        #[arg(long)]
        tampered_message: Option<String>,
        /// Message for the cross-message check
        #[arg(long)]
        second_message: Option<String>,
        /// Skip the cross-message check
        #[arg(long)]
        single_message: bool,
        /// Skip decapsulating a corrupted ciphertext
        #[arg(long)]
        no_kem_tamper: bool,
        /// Time each stage after the workflow
        #[arg(long)]
        bench: bool,
    },
    /// Time keygen, operation and verification
    Bench {
        /// Algorithm names or aliases; defaults to every enabled algorithm
        algorithms: Vec<String>,
        /// Message to sign
        #[arg(long)]
        message: Option<String>,
    },
}

/// Renders events for a terminal
struct ConsoleSink;

impl ConsoleSink {
    fn outputs(descriptor: &AlgorithmDescriptor) -> String {
        match descriptor.outputs() {
            OutputLengths::Signature { signature_len } => format!("signature {signature_len} B"),
            OutputLengths::Kem {
                ciphertext_len,
                shared_secret_len,
            } => format!("ciphertext {ciphertext_len} B, shared secret {shared_secret_len} B"),
        }
    }

    fn listing(item: &AlgorithmListing) {
        let descriptor = &item.descriptor;
        let status = if item.enabled { "enabled " } else { "disabled" };
        let aliases = if item.aliases.is_empty() {
            String::new()
        } else {
            format!(" (aka {})", item.aliases.join(", "))
        };
        println!(
            "[{status}] {:<20} {:<8} {:<9} public key {} B, secret key {} B, {}{aliases}",
            descriptor.name(),
            descriptor.family().to_string(),
            descriptor.kind().to_string(),
            descriptor.public_key_len(),
            descriptor.secret_key_len(),
            Self::outputs(descriptor),
        );
    }

    fn stage(stage: &StageReport) {
        let tag = match &stage.status {
            StageStatus::Passed => "PASS",
            StageStatus::ExpectedRejection => "REJECTED (expected)",
            StageStatus::Failed(_) => "FAIL",
        };
        let lengths = stage
            .lengths
            .iter()
            .map(|l| format!("{} {} B", l.label, l.len))
            .collect::<Vec<_>>()
            .join(", ");
        if lengths.is_empty() {
            println!("  [{tag}] {}", stage.step);
        } else {
            println!("  [{tag}] {} ({lengths})", stage.step);
        }
        if let StageStatus::Failed(reason) = &stage.status {
            println!("         {reason}");
        }
        if let Some(preview) = &stage.preview {
            println!("         {preview}");
        }
    }
}

impl ReportSink for ConsoleSink {
    fn record(&mut self, event: ReportEvent) {
        match event {
            ReportEvent::Listing(mut listing) => {
                listing.sort_by_key(|item| (item.descriptor.kind() as u8, item.descriptor.name().to_string()));
                for item in &listing {
                    Self::listing(item);
                }
            }
            ReportEvent::AlgorithmStarted(descriptor) => {
                println!();
                println!("=== {} ({} {}) ===", descriptor.name(), descriptor.family(), descriptor.kind());
                println!(
                    "  public key {} B, secret key {} B, {}",
                    descriptor.public_key_len(),
                    descriptor.secret_key_len(),
                    Self::outputs(&descriptor)
                );
            }
            ReportEvent::Stage(stage) => Self::stage(&stage),
            ReportEvent::Benchmark(bench) => {
                for result in &bench.results {
                    println!("  {:<12} {:>10.3} ms", result.label(), result.elapsed.as_secs_f64() * 1000.0);
                }
                match &bench.error {
                    Some(err) => println!("  benchmark for {} stopped: {err}", bench.algorithm),
                    None => println!("  {:<12} {:>10.3} ms", "total", bench.total().as_secs_f64() * 1000.0),
                }
            }
            ReportEvent::AlgorithmFinished {
                algorithm,
                failure,
                findings,
            } => match failure {
                Some(err) => println!("  => {algorithm} FAILED: {err}"),
                None if findings.is_empty() => println!("  => {algorithm} completed"),
                None => {
                    println!("  => {algorithm} completed with {} finding(s):", findings.len());
                    for finding in &findings {
                        println!("     {finding}");
                    }
                }
            },
        }
    }
}

fn summarize(summary: &RunSummary) -> ExitCode {
    println!();
    println!(
        "{} algorithm(s), {} failed, {} finding(s)",
        summary.outcomes.len(),
        summary.failures().count(),
        summary.finding_count()
    );
    ExitCode::from(summary.exit_code())
}

fn unavailable(err: &Error) -> ExitCode {
    eprintln!("error: {err}");
    let enabled = default_registry().enabled();
    if !enabled.is_empty() {
        let names: Vec<&str> = enabled.iter().map(AlgorithmDescriptor::name).collect();
        eprintln!("available: {}", names.join(", "));
    }
    ExitCode::from(2)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let registry = default_registry();
    let base = HarnessConfig::default().with_preview_bytes(cli.preview_bytes);

    match cli.cmd {
        Cmd::List { family, enabled_only } => {
            let mut listing = match family {
                Some(family) => registry.list_family(family),
                None => registry.list(),
            };
            if enabled_only {
                listing.retain(|item| item.enabled);
            }
            ConsoleSink.record(ReportEvent::Listing(listing));
            ExitCode::SUCCESS
        }
        Cmd::Run {
            algorithms,
            message,
            tampered_message,
            second_message,
            single_message,
            no_kem_tamper,
            bench,
        } => {
            let mut config = base
                .with_multi_message(!single_message)
                .with_kem_tamper_check(!no_kem_tamper)
                .with_benchmark(bench);
            if let Some(message) = message {
                config = config.with_message(message);
            }
            if let Some(tampered) = tampered_message {
                config = config.with_tampered_message(tampered);
            }
            if let Some(second) = second_message {
                config = config.with_second_message(second);
            }

            let mut workflow = Workflow::new(registry, config, ConsoleSink);
            match workflow.run(&algorithms[..]) {
                Ok(summary) => summarize(&summary),
                Err(err) => unavailable(&err),
            }
        }
        Cmd::Bench { algorithms, message } => {
            let mut config = base;
            if let Some(message) = message {
                config = config.with_benchmark_message(message);
            }

            let mut workflow = Workflow::new(registry, config, ConsoleSink);
            match workflow.bench(&algorithms[..]) {
                Ok(summary) => summarize(&summary),
                Err(err) => unavailable(&err),
            }
        }
    }
}

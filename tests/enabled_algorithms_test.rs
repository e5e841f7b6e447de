use pqc_harness::{
    AlgorithmKind, HarnessConfig, KemHarness, MemorySink, Result, SignatureHarness, Workflow, default_registry,
};

// ----- Key Lengths -----

#[test]
fn test_every_enabled_algorithm_matches_its_descriptor() -> Result<()> {
    let registry = default_registry();
    for descriptor in registry.enabled() {
        let name = descriptor.name();
        assert_eq!(registry.describe(name)?, descriptor);

        let (public_len, secret_len) = match descriptor.kind() {
            AlgorithmKind::Signature => {
                let mut harness = SignatureHarness::from_registry(registry, name)?;
                let keys = harness.generate_keys()?;
                (keys.public_key().len(), keys.secret_key().len())
            }
            AlgorithmKind::Kem => {
                let mut harness = KemHarness::from_registry(registry, name)?;
                let keys = harness.generate_keys()?;
                (keys.public_key().len(), keys.secret_key().len())
            }
        };
        assert_eq!(public_len, descriptor.public_key_len(), "{name} public key");
        assert_eq!(secret_len, descriptor.secret_key_len(), "{name} secret key");
    }
    Ok(())
}

// ----- Full Workflow -----

#[test]
fn test_every_enabled_algorithm_runs_clean() -> Result<()> {
    let registry = default_registry();
    let names: Vec<String> = registry.enabled().iter().map(|d| d.name().to_string()).collect();
    if names.is_empty() {
        return Ok(());
    }

    let mut workflow = Workflow::new(registry, HarnessConfig::default(), MemorySink::new());
    let summary = workflow.run(&names[..])?;
    assert_eq!(summary.outcomes.len(), names.len());
    for outcome in &summary.outcomes {
        assert!(outcome.is_clean(), "{}: {:?} {:?}", outcome.algorithm, outcome.failure, outcome.findings);
    }
    assert_eq!(summary.exit_code(), 0);
    Ok(())
}

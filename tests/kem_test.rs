#![cfg(feature = "ml-kem")]

use pqc_harness::{Error, KemHarness, KemState, Result, default_registry};

// ----- ML-KEM-768 Scenario -----

#[test]
fn test_ml_kem_768_scenario() -> Result<()> {
    let mut harness = KemHarness::from_registry(default_registry(), "ML-KEM-768")?;

    let keys = harness.generate_keys()?;
    assert_eq!(keys.public_key().len(), 1184);
    assert_eq!(keys.secret_key().len(), 2400);

    let ciphertext = harness.encapsulate()?;
    assert_eq!(ciphertext.len(), 1088);

    let secret = harness.decapsulate()?;
    assert_eq!(secret.len(), 32);

    harness.verify_agreement()?;
    assert_eq!(harness.state(), KemState::Verified);

    harness.verify_tamper_rejected()?;
    Ok(())
}

#[test]
fn test_every_ml_kem_level_agrees() -> Result<()> {
    for name in ["ML-KEM-512", "ML-KEM-768", "ML-KEM-1024"] {
        let mut harness = KemHarness::from_registry(default_registry(), name)?;
        let descriptor = harness.descriptor().clone();

        harness.generate_keys()?;
        let ciphertext = harness.encapsulate()?;
        assert_eq!(Some(ciphertext.len()), descriptor.ciphertext_len());
        harness.decapsulate()?;
        harness.verify_agreement()?;
    }
    Ok(())
}

#[test]
fn test_kyber_alias_resolves() -> Result<()> {
    let harness = KemHarness::from_registry(default_registry(), "Kyber768")?;
    assert_eq!(harness.descriptor().name(), "ML-KEM-768");
    Ok(())
}

#[test]
fn test_fresh_encapsulations_differ() -> Result<()> {
    let mut harness = KemHarness::from_registry(default_registry(), "ML-KEM-512")?;
    harness.generate_keys()?;
    let first = harness.encapsulate()?.clone();
    let second = harness.encapsulate()?.clone();
    assert_ne!(first, second);
    Ok(())
}

// ----- Error Paths -----

#[test]
fn test_decapsulate_before_encapsulate() -> Result<()> {
    let mut harness = KemHarness::from_registry(default_registry(), "ML-KEM-768")?;
    harness.generate_keys()?;
    assert!(matches!(harness.decapsulate(), Err(Error::InvalidState { .. })));
    Ok(())
}

#[cfg(feature = "ml-dsa")]
#[test]
fn test_signature_name_is_kind_mismatch() {
    let result = KemHarness::from_registry(default_registry(), "ML-DSA-65");
    assert!(matches!(result, Err(Error::KindMismatch { .. })));
}

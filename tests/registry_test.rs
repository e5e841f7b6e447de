use pqc_harness::{AlgorithmFamily, AlgorithmKind, Error, PREFERRED_ALGORITHMS, default_registry};

// ----- Listing -----

#[test]
fn test_list_covers_every_family() {
    let listing = default_registry().list();
    for family in AlgorithmFamily::BUILTIN {
        assert!(
            listing.iter().any(|item| item.descriptor.family() == family),
            "no {family} entries"
        );
    }
}

#[test]
fn test_enabled_flags_follow_build_features() {
    let registry = default_registry();
    for item in registry.list() {
        assert_eq!(item.enabled, item.descriptor.family().is_available(), "{}", item.descriptor.name());
        assert_eq!(registry.is_enabled(item.descriptor.name()), item.enabled);
    }
}

#[test]
fn test_enabled_descriptors_are_well_formed() {
    for descriptor in default_registry().enabled() {
        assert!(descriptor.is_well_formed(), "{descriptor:?}");
    }
}

#[test]
fn test_list_family_filters() {
    let kems = default_registry().list_family(AlgorithmFamily::MlKem);
    assert_eq!(kems.len(), 3);
    assert!(kems.iter().all(|item| item.descriptor.kind() == AlgorithmKind::Kem));
}

// ----- Lookup -----

#[test]
fn test_unknown_name_is_unavailable() {
    let registry = default_registry();
    assert!(!registry.is_enabled("RSA-2048"));
    assert!(matches!(
        registry.describe("RSA-2048"),
        Err(Error::AlgorithmUnavailable { .. })
    ));
}

#[cfg(feature = "ml-kem")]
#[test]
fn test_ml_kem_768_descriptor() {
    let descriptor = default_registry().describe("ML-KEM-768").unwrap();
    assert_eq!(descriptor.kind(), AlgorithmKind::Kem);
    assert_eq!(descriptor.public_key_len(), 1184);
    assert_eq!(descriptor.secret_key_len(), 2400);
    assert_eq!(descriptor.ciphertext_len(), Some(1088));
    assert_eq!(descriptor.shared_secret_len(), Some(32));
}

#[cfg(feature = "ml-dsa")]
#[test]
fn test_aliases_are_case_insensitive() {
    let registry = default_registry();
    let canonical = registry.describe("ML-DSA-87").unwrap();
    assert_eq!(registry.describe("DILITHIUM5").unwrap(), canonical);
    assert_eq!(registry.describe("ml-dsa-87").unwrap(), canonical);
}

#[cfg(feature = "ml-dsa")]
#[test]
fn test_preferred_order_picks_first_enabled() {
    let chosen = default_registry().first_enabled(PREFERRED_ALGORITHMS).unwrap();
    assert_eq!(chosen.name(), PREFERRED_ALGORITHMS[0]);
}

#[test]
fn test_first_enabled_with_no_match() {
    assert!(default_registry().first_enabled(&["nothing", "here"]).is_none());
}

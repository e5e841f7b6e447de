/*!
ML-KEM (CRYSTALS-Kyber) parameter sets.

Backed by `pqcrypto-kyber`. Key, ciphertext and shared-secret sizes are
identical to ML-KEM-512/768/1024.
*/

use std::sync::Arc;

use crate::core::crypto::traits::kem::KemScheme;
use crate::core::crypto::types::AlgorithmFamily;

pqclean_kem!(
    /// ML-KEM-512 (Kyber512), NIST category 1
    MlKem512, "ML-KEM-512", AlgorithmFamily::MlKem, pqcrypto_kyber::kyber512
);

pqclean_kem!(
    /// ML-KEM-768 (Kyber768), NIST category 3
    MlKem768, "ML-KEM-768", AlgorithmFamily::MlKem, pqcrypto_kyber::kyber768
);

pqclean_kem!(
    /// ML-KEM-1024 (Kyber1024), NIST category 5
    MlKem1024, "ML-KEM-1024", AlgorithmFamily::MlKem, pqcrypto_kyber::kyber1024
);

pub(crate) fn schemes() -> Vec<Arc<dyn KemScheme>> {
    vec![
        Arc::new(MlKem512::new()),
        Arc::new(MlKem768::new()),
        Arc::new(MlKem1024::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ml_kem_768_sizes() {
        let d = MlKem768::new().descriptor().clone();
        assert_eq!(d.public_key_len(), 1184);
        assert_eq!(d.secret_key_len(), 2400);
        assert_eq!(d.ciphertext_len(), Some(1088));
        assert_eq!(d.shared_secret_len(), Some(32));
    }

    #[test]
    fn test_encapsulate_decapsulate() {
        let scheme = MlKem1024::new();
        let keys = scheme.keypair().unwrap();
        let encapsulation = scheme.encapsulate(keys.public_key()).unwrap();
        let recovered = scheme
            .decapsulate(&encapsulation.ciphertext, keys.secret_key())
            .unwrap();
        assert!(recovered.ct_eq(&encapsulation.shared_secret));
    }

    #[test]
    fn test_corrupted_ciphertext_yields_different_secret() {
        let scheme = MlKem512::new();
        let keys = scheme.keypair().unwrap();
        let encapsulation = scheme.encapsulate(keys.public_key()).unwrap();
        let recovered = scheme
            .decapsulate(&encapsulation.ciphertext.corrupted(), keys.secret_key())
            .unwrap();
        assert!(!recovered.ct_eq(&encapsulation.shared_secret));
    }

    #[test]
    fn test_truncated_public_key_is_rejected() {
        let scheme = MlKem768::new();
        assert!(scheme.encapsulate(&[0u8; 100]).is_err());
    }
}

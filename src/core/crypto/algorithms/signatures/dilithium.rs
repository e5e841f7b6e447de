/*!
ML-DSA (CRYSTALS-Dilithium) parameter sets.

Backed by `pqcrypto-dilithium`, which ships the round-3 Dilithium
parameter sets. Security categories and key/signature shapes line up with
ML-DSA-44/65/87; exact sizes are whatever the library reports.
*/

use std::sync::Arc;

use crate::core::crypto::traits::signature::SignatureScheme;
use crate::core::crypto::types::AlgorithmFamily;

pqclean_signature!(
    /// ML-DSA-44 (Dilithium2), NIST category 2
    MlDsa44, "ML-DSA-44", AlgorithmFamily::MlDsa, pqcrypto_dilithium::dilithium2
);

pqclean_signature!(
    /// ML-DSA-65 (Dilithium3), NIST category 3
    MlDsa65, "ML-DSA-65", AlgorithmFamily::MlDsa, pqcrypto_dilithium::dilithium3
);

pqclean_signature!(
    /// ML-DSA-87 (Dilithium5), NIST category 5
    MlDsa87, "ML-DSA-87", AlgorithmFamily::MlDsa, pqcrypto_dilithium::dilithium5
);

pub(crate) fn schemes() -> Vec<Arc<dyn SignatureScheme>> {
    vec![
        Arc::new(MlDsa44::new()),
        Arc::new(MlDsa65::new()),
        Arc::new(MlDsa87::new()),
    ]
}

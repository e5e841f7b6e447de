/*!
Falcon parameter sets.

Falcon signatures are variable-length; the descriptor carries the maximum.
*/

use std::sync::Arc;

use crate::core::crypto::traits::signature::SignatureScheme;
use crate::core::crypto::types::AlgorithmFamily;

pqclean_signature!(
    /// Falcon-512, NIST category 1
    Falcon512, "Falcon-512", AlgorithmFamily::Falcon, pqcrypto_falcon::falcon512
);

pqclean_signature!(
    /// Falcon-1024, NIST category 5
    Falcon1024, "Falcon-1024", AlgorithmFamily::Falcon, pqcrypto_falcon::falcon1024
);

pub(crate) fn schemes() -> Vec<Arc<dyn SignatureScheme>> {
    vec![Arc::new(Falcon512::new()), Arc::new(Falcon1024::new())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_within_declared_maximum() {
        let scheme = Falcon512::new();
        let keys = scheme.keypair().unwrap();
        let max = scheme.descriptor().signature_len().unwrap();
        for message in [&b"a"[..], b"bb", b"a somewhat longer message for falcon"] {
            let signature = scheme.sign(message, keys.secret_key()).unwrap();
            assert!(signature.len() <= max);
            assert!(scheme.verify(message, &signature, keys.public_key()).unwrap());
        }
    }
}

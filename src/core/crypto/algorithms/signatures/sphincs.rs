/*!
SLH-DSA (SPHINCS+) parameter sets.

Backed by the "simple" SHA2 and SHAKE instances of `pqcrypto-sphincsplus`.
The "f" sets trade signature size for signing speed, the "s" sets the
other way round.
*/

use std::sync::Arc;

use crate::core::crypto::traits::signature::SignatureScheme;
use crate::core::crypto::types::AlgorithmFamily;

pqclean_signature!(
    SlhDsaSha2_128f,
    "SLH-DSA-SHA2-128f",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincssha2128fsimple
);

pqclean_signature!(
    SlhDsaSha2_128s,
    "SLH-DSA-SHA2-128s",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincssha2128ssimple
);

pqclean_signature!(
    SlhDsaSha2_192f,
    "SLH-DSA-SHA2-192f",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincssha2192fsimple
);

pqclean_signature!(
    SlhDsaSha2_192s,
    "SLH-DSA-SHA2-192s",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincssha2192ssimple
);

pqclean_signature!(
    SlhDsaSha2_256f,
    "SLH-DSA-SHA2-256f",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincssha2256fsimple
);

pqclean_signature!(
    SlhDsaSha2_256s,
    "SLH-DSA-SHA2-256s",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincssha2256ssimple
);

pqclean_signature!(
    SlhDsaShake128f,
    "SLH-DSA-SHAKE-128f",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincsshake128fsimple
);

pqclean_signature!(
    SlhDsaShake128s,
    "SLH-DSA-SHAKE-128s",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincsshake128ssimple
);

pqclean_signature!(
    SlhDsaShake192f,
    "SLH-DSA-SHAKE-192f",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincsshake192fsimple
);

pqclean_signature!(
    SlhDsaShake192s,
    "SLH-DSA-SHAKE-192s",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincsshake192ssimple
);

pqclean_signature!(
    SlhDsaShake256f,
    "SLH-DSA-SHAKE-256f",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincsshake256fsimple
);

pqclean_signature!(
    SlhDsaShake256s,
    "SLH-DSA-SHAKE-256s",
    AlgorithmFamily::SlhDsa,
    pqcrypto_sphincsplus::sphincsshake256ssimple
);

pub(crate) fn schemes() -> Vec<Arc<dyn SignatureScheme>> {
    vec![
        Arc::new(SlhDsaSha2_128f::new()),
        Arc::new(SlhDsaSha2_128s::new()),
        Arc::new(SlhDsaSha2_192f::new()),
        Arc::new(SlhDsaSha2_192s::new()),
        Arc::new(SlhDsaSha2_256f::new()),
        Arc::new(SlhDsaSha2_256s::new()),
        Arc::new(SlhDsaShake128f::new()),
        Arc::new(SlhDsaShake128s::new()),
        Arc::new(SlhDsaShake192f::new()),
        Arc::new(SlhDsaShake192s::new()),
        Arc::new(SlhDsaShake256f::new()),
        Arc::new(SlhDsaShake256s::new()),
    ]
}

/*!
Catalog of known parameter sets.

Lists every variant the harness can name, with the sizes published for it
and the legacy names it is also known by. An entry only becomes usable
when a provider with the same name is registered; the published sizes are
what gets reported for variants compiled out of this build.
*/

use crate::core::crypto::types::{AlgorithmDescriptor, AlgorithmFamily};

/// One statically known parameter set
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Published sizes
    pub descriptor: AlgorithmDescriptor,
    /// Other names the variant is known by
    pub aliases: &'static [&'static str],
}

fn signature(
    name: &'static str,
    aliases: &'static [&'static str],
    family: AlgorithmFamily,
    sizes: (usize, usize, usize),
) -> CatalogEntry {
    CatalogEntry {
        descriptor: AlgorithmDescriptor::signature(name, family, sizes.0, sizes.1, sizes.2),
        aliases,
    }
}

fn kem(
    name: &'static str,
    aliases: &'static [&'static str],
    sizes: (usize, usize, usize, usize),
) -> CatalogEntry {
    CatalogEntry {
        descriptor: AlgorithmDescriptor::kem(name, AlgorithmFamily::MlKem, sizes.0, sizes.1, sizes.2, sizes.3),
        aliases,
    }
}

/// Every parameter set the harness knows by name
pub fn builtin_catalog() -> Vec<CatalogEntry> {
    use AlgorithmFamily::{Falcon, MlDsa, SlhDsa};

    vec![
        signature("ML-DSA-44", &["Dilithium2"], MlDsa, (1312, 2560, 2420)),
        signature("ML-DSA-65", &["Dilithium3"], MlDsa, (1952, 4032, 3309)),
        signature("ML-DSA-87", &["Dilithium5"], MlDsa, (2592, 4896, 4627)),
        signature("SLH-DSA-SHA2-128f", &["SPHINCS+-SHA2-128f-simple"], SlhDsa, (32, 64, 17088)),
        signature("SLH-DSA-SHA2-128s", &["SPHINCS+-SHA2-128s-simple"], SlhDsa, (32, 64, 7856)),
        signature("SLH-DSA-SHA2-192f", &["SPHINCS+-SHA2-192f-simple"], SlhDsa, (48, 96, 35664)),
        signature("SLH-DSA-SHA2-192s", &["SPHINCS+-SHA2-192s-simple"], SlhDsa, (48, 96, 16224)),
        signature("SLH-DSA-SHA2-256f", &["SPHINCS+-SHA2-256f-simple"], SlhDsa, (64, 128, 49856)),
        signature("SLH-DSA-SHA2-256s", &["SPHINCS+-SHA2-256s-simple"], SlhDsa, (64, 128, 29792)),
        signature("SLH-DSA-SHAKE-128f", &["SPHINCS+-SHAKE-128f-simple"], SlhDsa, (32, 64, 17088)),
        signature("SLH-DSA-SHAKE-128s", &["SPHINCS+-SHAKE-128s-simple"], SlhDsa, (32, 64, 7856)),
        signature("SLH-DSA-SHAKE-192f", &["SPHINCS+-SHAKE-192f-simple"], SlhDsa, (48, 96, 35664)),
        signature("SLH-DSA-SHAKE-192s", &["SPHINCS+-SHAKE-192s-simple"], SlhDsa, (48, 96, 16224)),
        signature("SLH-DSA-SHAKE-256f", &["SPHINCS+-SHAKE-256f-simple"], SlhDsa, (64, 128, 49856)),
        signature("SLH-DSA-SHAKE-256s", &["SPHINCS+-SHAKE-256s-simple"], SlhDsa, (64, 128, 29792)),
        signature("Falcon-512", &[], Falcon, (897, 1281, 752)),
        signature("Falcon-1024", &[], Falcon, (1793, 2305, 1462)),
        kem("ML-KEM-512", &["Kyber512"], (800, 1632, 768, 32)),
        kem("ML-KEM-768", &["Kyber768"], (1184, 2400, 1088, 32)),
        kem("ML-KEM-1024", &["Kyber1024"], (1568, 3168, 1568, 32)),
    ]
}

/*!
Key encapsulation algorithm implementations.

Same approach as the signature adapters: one generated adapter per
`pqcrypto` KEM module.
*/

use std::sync::Arc;

use crate::core::crypto::traits::kem::KemScheme;

/// Implement [`KemScheme`] for a `pqcrypto` KEM module.
#[cfg(feature = "ml-kem")]
macro_rules! pqclean_kem {
    ($(#[$doc:meta])* $scheme:ident, $name:literal, $family:expr, $($backend:ident)::+) => {
        $(#[$doc])*
        pub struct $scheme {
            descriptor: $crate::core::crypto::types::AlgorithmDescriptor,
        }

        impl $scheme {
            pub fn new() -> Self {
                Self {
                    descriptor: $crate::core::crypto::types::AlgorithmDescriptor::kem(
                        $name,
                        $family,
                        $($backend)::+::public_key_bytes(),
                        $($backend)::+::secret_key_bytes(),
                        $($backend)::+::ciphertext_bytes(),
                        $($backend)::+::shared_secret_bytes(),
                    ),
                }
            }
        }

        impl Default for $scheme {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::core::crypto::traits::kem::KemScheme for $scheme {
            fn descriptor(&self) -> &$crate::core::crypto::types::AlgorithmDescriptor {
                &self.descriptor
            }

            fn keypair(&self) -> $crate::core::error::ProviderResult<$crate::core::crypto::types::KeyPair> {
                let (pk, sk) = $($backend)::+::keypair();
                $crate::core::crypto::types::KeyPair::try_from_slices(
                    ::pqcrypto_traits::kem::PublicKey::as_bytes(&pk),
                    ::pqcrypto_traits::kem::SecretKey::as_bytes(&sk),
                )
            }

            fn encapsulate(
                &self,
                public_key: &[u8],
            ) -> $crate::core::error::ProviderResult<$crate::core::crypto::types::Encapsulation> {
                let pk = <$($backend)::+::PublicKey as ::pqcrypto_traits::kem::PublicKey>::from_bytes(public_key)
                    .map_err(|err| $crate::core::error::ProviderError::malformed("public key", format!("{err:?}")))?;
                let (ss, ct) = $($backend)::+::encapsulate(&pk);
                Ok($crate::core::crypto::types::Encapsulation {
                    ciphertext: $crate::core::crypto::types::Ciphertext::try_from_slice(
                        ::pqcrypto_traits::kem::Ciphertext::as_bytes(&ct),
                    )?,
                    shared_secret: $crate::core::memory::SecretBytes::try_from_slice(
                        ::pqcrypto_traits::kem::SharedSecret::as_bytes(&ss),
                        "shared secret",
                    )?,
                })
            }

            fn decapsulate(
                &self,
                ciphertext: &$crate::core::crypto::types::Ciphertext,
                secret_key: &$crate::core::memory::SecretBytes,
            ) -> $crate::core::error::ProviderResult<$crate::core::crypto::types::SharedSecret> {
                let ct = <$($backend)::+::Ciphertext as ::pqcrypto_traits::kem::Ciphertext>::from_bytes(
                    ciphertext.as_bytes(),
                )
                .map_err(|err| $crate::core::error::ProviderError::malformed("ciphertext", format!("{err:?}")))?;
                let sk = <$($backend)::+::SecretKey as ::pqcrypto_traits::kem::SecretKey>::from_bytes(
                    secret_key.expose(),
                )
                .map_err(|err| $crate::core::error::ProviderError::malformed("secret key", format!("{err:?}")))?;
                let ss = $($backend)::+::decapsulate(&ct, &sk);
                $crate::core::memory::SecretBytes::try_from_slice(
                    ::pqcrypto_traits::kem::SharedSecret::as_bytes(&ss),
                    "shared secret",
                )
            }
        }
    };
}

#[cfg(feature = "ml-kem")]
pub mod kyber;

/// All KEMs compiled into this build
pub fn builtin_schemes() -> Vec<Arc<dyn KemScheme>> {
    #[allow(unused_mut)]
    let mut schemes: Vec<Arc<dyn KemScheme>> = Vec::new();

    #[cfg(feature = "ml-kem")]
    schemes.extend(kyber::schemes());

    schemes
}

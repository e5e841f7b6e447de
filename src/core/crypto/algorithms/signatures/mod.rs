/*!
Signature algorithm implementations.

Every parameter set is a thin adapter over one `pqcrypto` module. The
adapters are generated by `pqclean_signature!` so that adding a parameter
set is one line, not another arm in a match.
*/

use std::sync::Arc;

use crate::core::crypto::traits::signature::SignatureScheme;

/// Implement [`SignatureScheme`] for a `pqcrypto` signature module.
///
/// The descriptor is built from the module's own size queries, so it always
/// matches the compiled library.
#[cfg(any(feature = "ml-dsa", feature = "slh-dsa", feature = "falcon"))]
macro_rules! pqclean_signature {
    ($(#[$doc:meta])* $scheme:ident, $name:literal, $family:expr, $($backend:ident)::+) => {
        $(#[$doc])*
        pub struct $scheme {
            descriptor: $crate::core::crypto::types::AlgorithmDescriptor,
        }

        impl $scheme {
            pub fn new() -> Self {
                Self {
                    descriptor: $crate::core::crypto::types::AlgorithmDescriptor::signature(
                        $name,
                        $family,
                        $($backend)::+::public_key_bytes(),
                        $($backend)::+::secret_key_bytes(),
                        $($backend)::+::signature_bytes(),
                    ),
                }
            }
        }

        impl Default for $scheme {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::core::crypto::traits::signature::SignatureScheme for $scheme {
            fn descriptor(&self) -> &$crate::core::crypto::types::AlgorithmDescriptor {
                &self.descriptor
            }

            fn keypair(&self) -> $crate::core::error::ProviderResult<$crate::core::crypto::types::KeyPair> {
                let (pk, sk) = $($backend)::+::keypair();
                $crate::core::crypto::types::KeyPair::try_from_slices(
                    ::pqcrypto_traits::sign::PublicKey::as_bytes(&pk),
                    ::pqcrypto_traits::sign::SecretKey::as_bytes(&sk),
                )
            }

            fn sign(
                &self,
                message: &[u8],
                secret_key: &$crate::core::memory::SecretBytes,
            ) -> $crate::core::error::ProviderResult<$crate::core::crypto::types::Signature> {
                let sk = <$($backend)::+::SecretKey as ::pqcrypto_traits::sign::SecretKey>::from_bytes(
                    secret_key.expose(),
                )
                .map_err(|err| $crate::core::error::ProviderError::malformed("secret key", format!("{err:?}")))?;
                let signature = $($backend)::+::detached_sign(message, &sk);
                $crate::core::crypto::types::Signature::try_from_slice(
                    ::pqcrypto_traits::sign::DetachedSignature::as_bytes(&signature),
                )
            }

            fn verify(
                &self,
                message: &[u8],
                signature: &$crate::core::crypto::types::Signature,
                public_key: &[u8],
            ) -> $crate::core::error::ProviderResult<bool> {
                let pk = <$($backend)::+::PublicKey as ::pqcrypto_traits::sign::PublicKey>::from_bytes(public_key)
                    .map_err(|err| $crate::core::error::ProviderError::malformed("public key", format!("{err:?}")))?;
                // A signature that does not even parse cannot verify
                let Ok(sig) = <$($backend)::+::DetachedSignature as ::pqcrypto_traits::sign::DetachedSignature>::from_bytes(
                    signature.as_bytes(),
                ) else {
                    return Ok(false);
                };
                Ok($($backend)::+::verify_detached_signature(&sig, message, &pk).is_ok())
            }
        }
    };
}

#[cfg(feature = "ml-dsa")]
pub mod dilithium;

#[cfg(feature = "slh-dsa")]
pub mod sphincs;

#[cfg(feature = "falcon")]
pub mod falcon;

/// All signature schemes compiled into this build
pub fn builtin_schemes() -> Vec<Arc<dyn SignatureScheme>> {
    #[allow(unused_mut)]
    let mut schemes: Vec<Arc<dyn SignatureScheme>> = Vec::new();

    #[cfg(feature = "ml-dsa")]
    schemes.extend(dilithium::schemes());

    #[cfg(feature = "slh-dsa")]
    schemes.extend(sphincs::schemes());

    #[cfg(feature = "falcon")]
    schemes.extend(falcon::schemes());

    schemes
}

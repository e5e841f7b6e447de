/*!
Memory handling for sensitive data.

Secret keys and shared secrets are held in zero-on-drop buffers; every
other provider output is copied into a buffer of exactly the size the
provider produced.
*/

pub mod secret;

pub use secret::{SecretBytes, try_copy};

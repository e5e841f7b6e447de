/*!
Constant-time operations for security-sensitive code.

This module provides constant-time comparisons used when checking that
two parties derived the same secret, utilizing the subtle crate for the
core operations.
*/

use std::hint::black_box;
use subtle::ConstantTimeEq;

/// Compare two byte slices for equality in constant time.
///
/// The running time depends only on the lengths, which are public for
/// every buffer the harness compares. Slices of different length are
/// never equal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    black_box(a.ct_eq(b).unwrap_u8()) == 1
}

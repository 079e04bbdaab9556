//! Helpers shared by the CLI and the tests.

use crate::{Context, Digest, Spec};

/// Derives a deterministic address from a seed string by hashing it.
pub fn generate_address<C: Context>(key: &str) -> <C as Spec>::Address {
    let hash: [u8; 32] = <C as Spec>::Hasher::digest(key.as_bytes()).into();
    C::Address::from(hash)
}

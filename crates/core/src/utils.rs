//! Small shared helpers.

use rand::Rng;

/// Random lowercase-hex string of `len` characters, used for opaque token
/// material and placeholder meeting-link suffixes.
#[must_use]
pub fn random_hex(len: usize) -> String {
    const HEX: &[u8] = b"0123456789abcdef";
    let mut rng = rand::thread_rng();
    (0..len).map(|_| HEX[rng.gen_range(0..HEX.len())] as char).collect()
}

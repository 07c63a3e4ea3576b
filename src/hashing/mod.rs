//! BLAKE3 hashing helpers for feature hashing.
//!
//! The stub embedder maps tokens to vector buckets through these functions, so their output must
//! stay stable across platforms and releases (unlike `std`'s `DefaultHasher`).

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

/// Maps a token to `(bucket, sign)` for a vector of `dim` components.
///
/// The bucket comes from the low bits of the hash and the sign from the top bit, so collisions
/// between unrelated tokens partially cancel instead of always adding up.
#[inline]
pub fn hash_token(token: &str, dim: usize) -> (usize, f32) {
    let hash = hash_to_u64(token.as_bytes());
    let bucket = (hash % dim.max(1) as u64) as usize;
    let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
    (bucket, sign)
}

//! Per-SOW seed derivation
//!
//! A batch has one global seed. Each SOW hashes `(global_seed, sow_index)`
//! with SHA-256 and seeds its own generator from the first eight bytes of
//! the digest.

use sha2::{Digest, Sha256};

const SUBSTREAM_DOMAIN: &[u8] = b"beccs-rdm/sow-substream/v1";

/// Derive the seed of SOW `sow_index` from the batch seed
///
/// # Example
/// ```
/// use beccs_rdm_core::rng::derive_sow_seed;
///
/// assert_eq!(derive_sow_seed(7, 3), derive_sow_seed(7, 3));
/// assert_ne!(derive_sow_seed(7, 3), derive_sow_seed(7, 4));
/// ```
pub fn derive_sow_seed(global_seed: u64, sow_index: u64) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(SUBSTREAM_DOMAIN);
    hasher.update(global_seed.to_le_bytes());
    hasher.update(sow_index.to_le_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

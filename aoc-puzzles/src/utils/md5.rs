//! MD5 digests over a fixed secret key followed by a counter

use ::md5::{Digest, Md5};

/// Hashes `key ++ decimal(n)` for successive `n`.
///
/// The key is absorbed once and each digest starts from a clone of that
/// state, so only the counter bytes are fed per candidate.
#[derive(Clone)]
pub struct Md5Miner {
    prefix: Md5,
}

impl Md5Miner {
    pub fn new(key: &str) -> Self {
        let mut prefix = Md5::new();
        prefix.update(key.as_bytes());
        Self { prefix }
    }

    pub fn digest(&self, n: u64) -> [u8; 16] {
        let mut hasher = self.prefix.clone();
        hasher.update(n.to_string().as_bytes());
        let mut out = [0u8; 16];
        out.copy_from_slice(&hasher.finalize());
        out
    }
}

/// Number of leading zero hex digits in `digest`
pub fn leading_zero_nibbles(digest: &[u8; 16]) -> u32 {
    let mut count = 0;
    for byte in digest {
        if *byte == 0 {
            count += 2;
        } else {
            if byte >> 4 == 0 {
                count += 1;
            }
            break;
        }
    }
    count
}

/// Lowercase hex rendering of `digest`
pub fn to_hex(digest: &[u8; 16]) -> String {
    use std::fmt::Write;

    digest.iter().fold(String::with_capacity(32), |mut out, byte| {
        let _ = write!(out, "{:02x}", byte);
        out
    })
}

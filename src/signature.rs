//! Sentence fingerprinting for cross-chunk deduplication.
//!
//! Uses a fixed, seedless hash (FNV-1a) rather than `std`'s randomly-seeded
//! `RandomState`: the registry's dedup decisions must be identical across
//! runs of the same input, and token hash order feeds directly into which
//! tokens are picked, so the hash itself must be deterministic across runs.

use crate::lexer::tokenize_alphanumeric;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Maximum number of distinct tokens folded into a signature.
pub const MAX_SIGNATURE_TOKENS: usize = 6;

/// A 64-bit fingerprint over the sentence's up-to-6 lowest-hashed distinct
/// lowercased alphanumeric tokens, hashed together in ascending hash order.
///
/// Sentences with identical token multisets (modulo case/punctuation)
/// produce the same signature; sentences differing by one token usually do
/// not. Collisions are an accepted dedup false positive.
#[must_use]
pub fn sentence_signature(s: &[u8]) -> u64 {
    let tokens = tokenize_alphanumeric(s);
    let mut hashes: Vec<u64> = tokens
        .iter()
        .map(|t| fnv1a64(t.as_bytes()))
        .collect::<std::collections::BTreeSet<u64>>()
        .into_iter()
        .collect();
    hashes.sort_unstable();
    hashes.truncate(MAX_SIGNATURE_TOKENS);

    let mut hash = FNV_OFFSET_BASIS;
    for h in hashes {
        hash ^= h;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_token_multisets_produce_same_signature() {
        let a = sentence_signature(b"The Quick Brown Fox!");
        let b = sentence_signature(b"the quick brown fox");
        assert_eq!(a, b);
    }

    #[test]
    fn differing_by_one_token_usually_differs() {
        let a = sentence_signature(b"quick brown fox jumps");
        let b = sentence_signature(b"quick brown fox leaps");
        assert_ne!(a, b);
    }

    #[test]
    fn deterministic_across_calls() {
        let s = b"Repeat this sentence exactly.";
        assert_eq!(sentence_signature(s), sentence_signature(s));
    }
}

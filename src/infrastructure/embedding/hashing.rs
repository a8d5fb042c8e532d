//! Feature-hashing bag-of-words embedder
//!
//! Needs no model and is deterministic across processes, which makes it a
//! fit for the in-memory index and for tests. Texts sharing most of their
//! words land close together; word order is ignored.

use crate::domain::TextEmbedder;

pub const DEFAULT_DIMENSIONS: usize = 512;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes lowercase word tokens into a fixed number of signed buckets
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    /// Create an embedder; zero dimensions falls back to the default width
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: if dimensions == 0 {
                DEFAULT_DIMENSIONS
            } else {
                dimensions
            },
        }
    }

    fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(|token| token.to_lowercase())
    }

    fn fnv1a(token: &str) -> u64 {
        token.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl TextEmbedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for token in Self::tokens(text) {
            let hash = Self::fnv1a(&token);
            let bucket = (hash % self.dimensions as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }

        vector
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

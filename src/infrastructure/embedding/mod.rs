//! Text embedder implementations

mod hashing;

pub use hashing::{HashingEmbedder, DEFAULT_DIMENSIONS};

//! Text embedder trait definition

use std::fmt::Debug;

/// Turns text into a fixed-width vector for similarity search
pub trait TextEmbedder: Send + Sync + Debug {
    /// Embed a single text
    fn embed(&self, text: &str) -> Vec<f32>;

    /// Width of the vectors this embedder produces
    fn dimensions(&self) -> usize;
}

//! Text embedding domain traits and vector math

mod provider;
mod similarity;

pub use provider::TextEmbedder;
pub use similarity::{cosine_distance, cosine_similarity};

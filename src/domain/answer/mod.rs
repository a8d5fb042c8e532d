//! Answer post-processing

mod normalizer;

pub use normalizer::{normalize, AnswerStrategy};

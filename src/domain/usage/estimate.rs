use std::time::Duration;

/// Empirical ratio of words to tokens for English text
pub const WORDS_PER_TOKEN: f64 = 0.75;

/// Estimate the token count of a text from its whitespace-separated words
pub fn estimate_tokens(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    (words as f64 / WORDS_PER_TOKEN) as u32
}

/// Elapsed time in seconds, rounded to milliseconds
pub fn round_latency(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}

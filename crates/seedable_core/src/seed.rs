//! Seed resolution.
//!
//! A supplied non-empty seed is used verbatim. Otherwise a fresh decimal seed
//! is drawn from the thread-local entropy source; that draw sits outside the
//! reproducibility guarantee, but the resulting string can be read back and
//! replayed.

use rand::Rng;

/// Upper bound (exclusive of rounding) of generated seeds.
const FRESH_SEED_SPAN: f64 = 10_000_000.0;

/// Draw a non-deterministic seed: a decimal string of up to seven digits.
pub fn fresh_seed() -> String {
    let unit: f64 = rand::thread_rng().gen();
    format!("{}", (unit * FRESH_SEED_SPAN).round() as u64)
}

/// Keep a supplied non-empty seed, or generate one.
pub fn resolve_seed(seed: Option<&str>) -> String {
    match seed {
        Some(seed) if !seed.is_empty() => seed.to_owned(),
        _ => fresh_seed(),
    }
}

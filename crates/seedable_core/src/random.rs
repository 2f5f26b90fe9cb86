//! The seedable random source and its derived samplers.
//!
//! Every sampler draws from the owning [`BitMix`] stream and nothing else.
//! The number and order of draws each sampler takes is fixed, so a seed plus
//! a call sequence always reproduces the same outputs.

use rand::RngCore;
use tracing::debug;

use crate::error::SampleError;
use crate::pool::{try_unique_pool, unique_pool};
use crate::rng::BitMix;
use crate::seed::resolve_seed;
use crate::time::Timestamp;
use crate::words::LOREM_WORDS;

/// Alphabet used by [`SeedableRandom::fixed_alphabet_string`].
pub const ALPHANUMERIC: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Deterministic random source keyed by a text seed.
///
/// Instances are independent: two generators built from the same seed yield
/// identical sequences, and nothing is shared between them.
#[derive(Clone, Debug)]
pub struct SeedableRandom {
    seed: String,
    generator: BitMix,
}

impl SeedableRandom {
    /// Build a generator from `seed`, or from a freshly generated seed when
    /// `seed` is absent or empty.
    pub fn new(seed: Option<&str>) -> Self {
        let seed = resolve_seed(seed);
        let generator = BitMix::from_seed_str(&seed);
        debug!(%seed, "seeded generator");
        Self { seed, generator }
    }

    /// Replace the seed and restart the stream. The previous stream is lost.
    pub fn reseed(&mut self, seed: Option<&str>) {
        *self = Self::new(seed);
    }

    /// The seed currently driving the stream.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// One raw draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.generator.next_f64()
    }

    /// `min + (max - min) * draw`. `min > max` is accepted and scales the
    /// same way.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// One uniformly chosen element of `items`.
    ///
    /// An empty slice fails before any draw is taken.
    pub fn pick_one<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, SampleError> {
        if items.is_empty() {
            return Err(SampleError::EmptyInput { what: "item slice" });
        }
        Ok(&items[self.index(items.len())])
    }

    /// Between `min` and `max` (inclusive) picks from `items`.
    ///
    /// The count is drawn first. Each pick then takes exactly one draw. With
    /// `allow_duplicates` off, a pick already present in the result is
    /// dropped without a retry, so the result may be shorter than the count.
    pub fn pick_many<T>(
        &mut self,
        items: &[T],
        min: usize,
        max: usize,
        allow_duplicates: bool,
    ) -> Result<Vec<T>, SampleError>
    where
        T: Clone + PartialEq,
    {
        let count = self.uniform(min as f64, max as f64 + 1.0).floor() as usize;
        if count == 0 {
            return Ok(Vec::new());
        }
        if items.is_empty() {
            return Err(SampleError::EmptyInput { what: "item slice" });
        }
        let mut picked: Vec<T> = Vec::with_capacity(count);
        for _ in 0..count {
            let candidate = &items[self.index(items.len())];
            if allow_duplicates || !picked.contains(candidate) {
                picked.push(candidate.clone());
            }
        }
        Ok(picked)
    }

    /// Collect `length` values from `factory`, which may draw from this
    /// generator. See [`unique_pool`] for the rejection policy.
    pub fn pool<T, F>(&mut self, mut factory: F, length: usize, unique: bool) -> Vec<T>
    where
        T: PartialEq,
        F: FnMut(&mut Self) -> T,
    {
        unique_pool(|| factory(self), length, unique)
    }

    /// [`pool`](Self::pool) with a fallible factory. The first error is
    /// returned immediately; see [`try_unique_pool`].
    pub fn try_pool<T, E, F>(
        &mut self,
        mut factory: F,
        length: usize,
        unique: bool,
    ) -> Result<Vec<T>, E>
    where
        T: PartialEq,
        F: FnMut(&mut Self) -> Result<T, E>,
    {
        try_unique_pool(|| factory(self), length, unique)
    }

    /// A point on the line through `start` and `end`, truncated to whole
    /// milliseconds. `start` after `end` is not rejected.
    pub fn interpolated_date(&mut self, start: Timestamp, end: Timestamp) -> Timestamp {
        let start_ms = start.as_millis() as f64;
        let span = end.as_millis() as f64 - start_ms;
        let millis = start_ms + self.next_f64() * span;
        Timestamp::from_millis(millis.trunc() as i64)
    }

    /// `length` characters from [`ALPHANUMERIC`], one draw each.
    pub fn fixed_alphabet_string(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(ALPHANUMERIC[self.index(ALPHANUMERIC.len())]))
            .collect()
    }

    /// `ceil(uniform(min, max))` words from `words`, joined by single spaces.
    pub fn word_sequence<S>(
        &mut self,
        words: &[S],
        min: usize,
        max: usize,
    ) -> Result<String, SampleError>
    where
        S: AsRef<str>,
    {
        let count = self.count_ceil(min, max);
        if count > 0 && words.is_empty() {
            return Err(SampleError::EmptyInput { what: "word table" });
        }
        Ok(self.join_words(words, count))
    }

    /// Lorem-ipsum text of `min` to `max` words.
    pub fn lorem(&mut self, min: usize, max: usize) -> String {
        let count = self.count_ceil(min, max);
        self.join_words(LOREM_WORDS, count)
    }

    /// A picsum.photos URL whose image seed comes from one draw.
    pub fn image_url(&mut self, width: u32, height: u32) -> String {
        let image_seed = (self.next_f64() * 1000.0).floor() as u32;
        format!("https://picsum.photos/seed/{image_seed}/{width}/{height}")
    }

    fn index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64).floor() as usize
    }

    fn count_ceil(&mut self, min: usize, max: usize) -> usize {
        self.uniform(min as f64, max as f64).ceil() as usize
    }

    fn join_words<S: AsRef<str>>(&mut self, words: &[S], count: usize) -> String {
        let mut text = String::new();
        for i in 0..count {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(words[self.index(words.len())].as_ref());
        }
        text
    }
}

impl RngCore for SeedableRandom {
    fn next_u32(&mut self) -> u32 {
        self.generator.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.generator.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generator.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.generator.try_fill_bytes(dest)
    }
}

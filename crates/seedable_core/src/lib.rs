//! Seed-reproducible random sampling.
//!
//! A text seed is hashed into the initial state of a 32-bit bit-mixing
//! generator. [`SeedableRandom`] owns that generator and exposes samplers
//! (ranges, element picks, bounded unique pools, dates, alphanumeric strings,
//! word sequences) whose draw order is fixed, so the same seed and call
//! sequence always give the same outputs.
//!
//! ```
//! use seedable_core::SeedableRandom;
//!
//! let mut a = SeedableRandom::new(Some("docs"));
//! let mut b = SeedableRandom::new(Some("docs"));
//! assert_eq!(a.fixed_alphabet_string(8), b.fixed_alphabet_string(8));
//! assert_eq!(a.uniform(5.0, 5.0), 5.0);
//! ```

pub mod error;
pub mod pool;
pub mod random;
pub mod rng;
pub mod seed;
pub mod time;
pub mod words;

pub use error::SampleError;
pub use random::SeedableRandom;
pub use time::Timestamp;

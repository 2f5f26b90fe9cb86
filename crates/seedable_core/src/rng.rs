//! Seed hashing and the 32-bit bit-mixing generator.
//!
//! A text seed is stretched by [`SeedHasher`] into a sequence of well-mixed
//! `u32` values. Exactly one of those values initialises a [`BitMix`]
//! generator, whose draws feed every sampler in the crate. All arithmetic is
//! modulo 2^32 so the streams match byte-for-byte on every platform.

use rand::RngCore;

/// Scale factor mapping a raw `u32` onto `[0, 1)`.
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Stateful string hasher producing an endless `u32` sequence from a seed.
///
/// The seed is consumed as UTF-16 code units, so non-ASCII seeds hash to the
/// same state as any other implementation that walks code units.
#[derive(Clone, Debug)]
pub struct SeedHasher {
    state: u32,
}

impl SeedHasher {
    /// Absorb `seed` into a fresh hasher state.
    pub fn new(seed: &str) -> Self {
        let units: Vec<u16> = seed.encode_utf16().collect();
        let mut state = 1_779_033_703u32 ^ units.len() as u32;
        for unit in units {
            state = (state ^ u32::from(unit)).wrapping_mul(3_432_918_353);
            state = state.rotate_left(13);
        }
        Self { state }
    }

    /// Advance the hasher and return the next mixed value.
    pub fn next_u32(&mut self) -> u32 {
        let mut h = self.state;
        h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507);
        h = (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
        h ^= h >> 16;
        self.state = h;
        h
    }
}

/// 32-bit bit-mixing generator.
///
/// The state advances by a fixed odd increment on every draw; the output is a
/// mixed copy of the new state. An initial state of zero is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitMix {
    state: u32,
}

impl BitMix {
    pub const INCREMENT: u32 = 0x6D2B_79F5;

    pub fn new(state: u32) -> Self {
        Self { state }
    }

    /// Build the generator from the first value of a [`SeedHasher`] over `seed`.
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(SeedHasher::new(seed).next_u32())
    }

    /// Advance the state and return the raw mixed output.
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Advance the state and return the next draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        draw_to_unit(self.next_raw())
    }
}

impl RngCore for BitMix {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    /// Two draws, low word first.
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_raw());
        let high = u64::from(self.next_raw());
        (high << 32) | low
    }

    /// One draw per four bytes, little-endian; a short tail still costs a draw.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Map a raw generator output onto `[0, 1)` with 2^-32 resolution.
pub fn draw_to_unit(raw: u32) -> f64 {
    f64::from(raw) / UNIT_SCALE
}

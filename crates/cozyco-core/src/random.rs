//! Seeded random source
//!
//! An ARC4 keystream generator keyed from a seed string. Each
//! [`RandomSource`] owns its own stream, so independent generation calls
//! never share state and can run on separate threads.
//!
//! Two key schemes are supported. [`KeyScheme::Compatible`] is bit-compatible
//! with the `seedrandom` family of generators and reproduces previously
//! published artwork, but seeds whose key is a repetition of a shorter
//! seed's key (`"1"` and `"11"`) yield the same stream.
//! [`KeyScheme::Terminated`], the default, appends a NUL code unit to the
//! key so every seed string keys a distinct stream.
//!
//! ```rust
//! use cozyco_core::random::{KeyScheme, RandomSource};
//!
//! let mut rng = RandomSource::with_scheme(Some("hello."), KeyScheme::Compatible);
//! assert_eq!(rng.value(), 0.928_257_879_579_245_4);
//! ```

use crate::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// ARC4 keystream
// ============================================================================

/// Bytes per keystream draw
const CHUNKS: usize = 6;

/// 256^6, the denominator of a fresh 48-bit draw
const START_DENOM: f64 = 281_474_976_710_656.0;

/// 2^52, minimum numerator before a draw is considered full precision
const SIGNIFICANCE: f64 = 4_503_599_627_370_496.0;

/// 2^53, numerators at or above this are shifted back down
const OVERFLOW: f64 = 9_007_199_254_740_992.0;

/// Keystream bytes discarded after key scheduling (RC4-drop[256])
const DROPPED_BYTES: usize = 256;

/// Lower bound of a synthesized seed (10 decimal digits)
const RANDOM_SEED_MIN: u64 = 1_000_000_000;

/// Upper bound of a synthesized seed
const RANDOM_SEED_MAX: u64 = 9_999_999_999;

#[derive(Clone)]
struct Arc4 {
    i: u8,
    j: u8,
    s: [u8; 256],
}

impl Arc4 {
    fn new(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        let mut s = [0u8; 256];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(s[i]);
            s.swap(i, j as usize);
        }

        let mut arc4 = Self { i: 0, j: 0, s };
        for _ in 0..DROPPED_BYTES {
            arc4.next_byte();
        }
        arc4
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.s.swap(self.i as usize, self.j as usize);
        let index = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
        self.s[index as usize]
    }

    /// Read `count` bytes as one big-endian number
    fn next_number(&mut self, count: usize) -> f64 {
        let mut r = 0.0;
        for _ in 0..count {
            r = r * 256.0 + f64::from(self.next_byte());
        }
        r
    }

    /// Uniform float in [0, 1) with 52 bits of precision
    fn next_f64(&mut self) -> f64 {
        let mut n = self.next_number(CHUNKS);
        let mut d = START_DENOM;
        let mut x: u32 = 0;

        while n < SIGNIFICANCE {
            n = (n + f64::from(x)) * 256.0;
            d *= 256.0;
            x = u32::from(self.next_byte());
        }
        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }

        (n + f64::from(x)) / d
    }
}

/// How a seed string is turned into an ARC4 key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScheme {
    /// Seed code units only; matches `seedrandom` output exactly
    Compatible,
    /// Seed code units followed by a NUL terminator
    #[default]
    Terminated,
}

/// Smear the seed's UTF-16 code units into a key of at most 256 bytes
fn mix_key(seed: &str, scheme: KeyScheme) -> Vec<u8> {
    let terminator: &[u16] = match scheme {
        KeyScheme::Compatible => &[],
        KeyScheme::Terminated => &[0],
    };
    let mut key: Vec<u8> = Vec::with_capacity(seed.len().min(255) + 1);
    let mut smear: i32 = 0;

    for (j, unit) in seed
        .encode_utf16()
        .chain(terminator.iter().copied())
        .enumerate()
    {
        let slot = j & 0xff;
        smear ^= key.get(slot).map_or(0, |&k| i32::from(k) * 19);
        let mixed = (smear + i32::from(unit)) & 0xff;
        if slot < key.len() {
            key[slot] = mixed as u8;
        } else {
            key.push(mixed as u8);
        }
    }

    key
}

// ============================================================================
// RandomSource
// ============================================================================

/// A value paired with its relative selection weight
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Deterministic random stream derived from a seed string
///
/// Every draw advances the stream by one step; two sources built from the
/// same seed produce identical sequences.
#[derive(Clone)]
pub struct RandomSource {
    seed: String,
    scheme: KeyScheme,
    arc4: Arc4,
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomSource")
            .field("seed", &self.seed)
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

impl RandomSource {
    /// Create a source from a seed using the default key scheme.
    ///
    /// A missing or empty seed is replaced by [`RandomSource::random_seed`],
    /// so construction never fails.
    pub fn new(seed: Option<&str>) -> Self {
        Self::with_scheme(seed, KeyScheme::default())
    }

    /// Create a source from a seed with an explicit key scheme
    pub fn with_scheme(seed: Option<&str>, scheme: KeyScheme) -> Self {
        let seed = match seed {
            Some(s) if !s.is_empty() => s.to_owned(),
            _ => {
                let generated = Self::random_seed();
                tracing::debug!("No seed supplied, using random seed {}", generated);
                generated
            }
        };
        let arc4 = Arc4::new(&mix_key(&seed, scheme));
        Self { seed, scheme, arc4 }
    }

    /// Synthesize a random 10-digit decimal seed
    pub fn random_seed() -> String {
        rand::rng()
            .random_range(RANDOM_SEED_MIN..=RANDOM_SEED_MAX)
            .to_string()
    }

    /// The seed this stream was keyed from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    /// Re-key the stream from a new seed, restarting it
    pub fn set_seed(&mut self, seed: &str) {
        self.arc4 = Arc4::new(&mix_key(seed, self.scheme));
        self.seed = seed.to_owned();
    }

    /// Uniform float in [0, 1)
    pub fn value(&mut self) -> f64 {
        self.arc4.next_f64()
    }

    /// Uniform float in [0, a)
    pub fn value_to(&mut self, a: f64) -> f64 {
        self.value() * a
    }

    /// Uniform float between `a` and `b`, in either order
    pub fn value_range(&mut self, a: f64, b: f64) -> f64 {
        let (lo, hi) = if a > b { (b, a) } else { (a, b) };
        lo + self.value() * (hi - lo)
    }

    /// Always 0: a [0, 1) draw truncated toward zero
    pub fn value_int(&mut self) -> i64 {
        self.value() as i64
    }

    /// Integer in [0, a), truncated toward zero
    pub fn value_int_to(&mut self, a: f64) -> i64 {
        self.value_to(a) as i64
    }

    /// Integer between `a` and `b`, truncated toward zero.
    ///
    /// Truncation means the upper bound is practically never returned:
    /// `value_int_range(0.0, 5.0)` yields one of `0..=4`.
    pub fn value_int_range(&mut self, a: f64, b: f64) -> i64 {
        self.value_range(a, b) as i64
    }

    /// Fair coin flip
    pub fn boolean(&mut self) -> bool {
        self.value() > 0.5
    }

    /// Shuffled copy of `items` (Fisher-Yates, walking from the end)
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let other = self.value_int_to((i + 1) as f64) as usize;
            shuffled.swap(i, other);
        }
        shuffled
    }

    /// Pick an element with `value_int_range(0, len - 1)`.
    ///
    /// Because of truncation the last element is only picked when it is the
    /// only one. Returns `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.value_int_range(0.0, (items.len() - 1) as f64);
        items.get(index as usize)
    }

    /// Index drawn in proportion to `weights`.
    ///
    /// Empty input yields `Ok(None)`; a non-positive total is an error.
    pub fn weighted(&mut self, weights: &[f64]) -> Result<Option<usize>> {
        if weights.is_empty() {
            return Ok(None);
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Weights must sum to > 0, got {}",
                total
            )));
        }

        let mut remaining = self.value() * total;
        for (i, &weight) in weights.iter().enumerate() {
            if remaining < weight {
                return Ok(Some(i));
            }
            remaining -= weight;
        }
        Ok(Some(0))
    }

    /// Value drawn from a weighted set
    pub fn weighted_set<'a, T>(&mut self, set: &'a [Weighted<T>]) -> Result<Option<&'a T>> {
        let weights: Vec<f64> = set.iter().map(|w| w.weight).collect();
        Ok(self
            .weighted(&weights)?
            .and_then(|i| set.get(i))
            .map(|w| &w.value))
    }
}

// ============================================================================
// Tests
// ============================================================================

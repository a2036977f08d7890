//! Deterministic seeded randomizer
//!
//! A port of the ARC4-based `seedrandom` generator so that a given seed string
//! reproduces the exact same random stream on every platform and run. Each
//! `Randomizer` owns one independent stream; `choose_from`, `shuffle`, and
//! `shuffle_around` all draw from it in call order.

use std::fmt;

const WIDTH: usize = 256;
const MASK: usize = 255;
const CHUNKS: usize = 6;
/// 256^6: denominator for the initial 48-bit chunk
const START_DENOM: f64 = 281_474_976_710_656.0;
/// 2^52: required significance before normalizing
const SIGNIFICANCE: f64 = 4_503_599_627_370_496.0;
/// 2^53
const OVERFLOW: f64 = 9_007_199_254_740_992.0;

/// Error type for randomizer operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// `choose_from` was called on an empty list
    EmptyInput,
    /// `shuffle_around` was asked to center an element absent from the list
    NotFound(String),
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Cannot choose from an empty list"),
            Self::NotFound(element) => {
                write!(f, "Element {element} is not a member of the array to shuffle")
            }
        }
    }
}

impl std::error::Error for RandomError {}

/// ARC4 stream cipher state, used here as a PRNG
///
/// Construction discards the first 256 output bytes (RC4-drop[256]), matching
/// the reference generator.
struct Arc4 {
    s: [u8; WIDTH],
    i: u8,
    j: u8,
}

impl Arc4 {
    fn new(key: &[u8]) -> Self {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        let mut s = [0u8; WIDTH];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j: u8 = 0;
        for i in 0..WIDTH {
            let t = s[i];
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(t);
            s[i] = s[j as usize];
            s[j as usize] = t;
        }

        let mut arc4 = Self { s, i: 0, j: 0 };
        arc4.g(WIDTH);
        arc4
    }

    /// Emit `count` bytes folded into a float, big-endian base 256
    ///
    /// Only exact for `count <= 6` (48 bits fit a f64 mantissa); larger counts
    /// are used solely for discarding output.
    fn g(&mut self, count: usize) -> f64 {
        let mut r = 0.0;
        for _ in 0..count {
            self.i = self.i.wrapping_add(1);
            let t = self.s[self.i as usize];
            self.j = self.j.wrapping_add(t);
            self.s[self.i as usize] = self.s[self.j as usize];
            self.s[self.j as usize] = t;

            let idx = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
            r = r * 256.0 + f64::from(self.s[idx as usize]);
        }
        r
    }
}

/// Fold a seed string into an ARC4 key of at most 256 bytes
///
/// Operates on UTF-16 code units with the xor-smear recurrence of the
/// reference generator, so identical seed strings produce identical keys.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: i32 = 0;

    for (j, unit) in seed.encode_utf16().enumerate() {
        let idx = j & MASK;
        let prior = key.get(idx).map_or(0, |&v| i32::from(v).wrapping_mul(19));
        smear ^= prior;
        let value = (smear.wrapping_add(i32::from(unit)) & MASK as i32) as u8;
        if idx < key.len() {
            key[idx] = value;
        } else {
            key.push(value);
        }
    }

    key
}

/// Deterministic seeded random source
///
/// Successive floats in `[0, 1)` are a pure function of the seed and call
/// order. No global randomness is involved.
///
/// # Examples
/// ```
/// use spelling_bee::core::Randomizer;
///
/// let mut a = Randomizer::new("seed");
/// let mut b = Randomizer::new("seed");
/// assert_eq!(a.shuffle(&[1, 2, 3]), b.shuffle(&[1, 2, 3]));
/// ```
pub struct Randomizer {
    arc4: Arc4,
}

impl Randomizer {
    /// Create a randomizer from a seed string
    #[must_use]
    pub fn new(seed: &str) -> Self {
        Self {
            arc4: Arc4::new(&mix_key(seed)),
        }
    }

    /// Next float in `[0, 1)` with full 53-bit significance
    fn next_f64(&mut self) -> f64 {
        let mut n = self.arc4.g(CHUNKS);
        let mut d = START_DENOM;
        let mut x: u32 = 0;

        while n < SIGNIFICANCE {
            n = (n + f64::from(x)) * 256.0;
            d *= 256.0;
            x = self.arc4.g(1) as u32;
        }
        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }

        (n + f64::from(x)) / d
    }

    /// Pseudo-random index into a list of `len` elements
    fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64).floor() as usize
    }

    /// Choose one element from the list
    ///
    /// # Errors
    /// Returns `RandomError::EmptyInput` if the list is empty.
    pub fn choose_from<'a, T>(&mut self, list: &'a [T]) -> Result<&'a T, RandomError> {
        if list.is_empty() {
            return Err(RandomError::EmptyInput);
        }
        Ok(&list[self.next_index(list.len())])
    }

    /// Return the elements in a pseudo-random permutation
    ///
    /// Walks from the last index down to 0, swapping each position with an
    /// index drawn over the full length. The index range is deliberate: the
    /// published reference vectors were produced this way, and changing it
    /// would silently re-deal every historical puzzle.
    pub fn shuffle<T: Clone>(&mut self, list: &[T]) -> Vec<T> {
        let mut output: Vec<T> = list.to_vec();

        for i in (0..output.len()).rev() {
            let j = self.next_index(output.len());
            output.swap(i, j);
        }

        output
    }

    /// Shuffle, then move `element` to the middle index `floor((n-1)/2)`
    ///
    /// # Errors
    /// Returns `RandomError::NotFound` if `element` is not in the list. That
    /// indicates a broken invariant on the caller's side (e.g. a center letter
    /// outside the letter set), not bad user input.
    pub fn shuffle_around<T>(&mut self, list: &[T], element: &T) -> Result<Vec<T>, RandomError>
    where
        T: Clone + PartialEq + fmt::Display,
    {
        let mut shuffled = self.shuffle(list);

        let position = shuffled
            .iter()
            .position(|item| item == element)
            .ok_or_else(|| RandomError::NotFound(element.to_string()))?;

        let center = (shuffled.len() - 1) / 2;
        shuffled.swap(position, center);
        Ok(shuffled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn chooses_from_a_list() {
        let options = letters("abcdefghijklmnopqrstuvwxyz");
        let mut randomizer = Randomizer::new("seed");

        let mut got = std::collections::HashSet::new();
        for _ in 0..1000 {
            let choice = *randomizer.choose_from(&options).unwrap();
            assert!(options.contains(&choice));
            got.insert(choice);
        }

        // 1000 draws over 26 options should hit every one
        assert_eq!(got.len(), options.len());
    }

    #[test]
    fn choose_from_empty_list_fails() {
        let mut randomizer = Randomizer::new("seed");
        let empty: Vec<char> = Vec::new();
        assert_eq!(
            randomizer.choose_from(&empty),
            Err(RandomError::EmptyInput)
        );
    }

    #[test]
    fn shuffles_deterministically() {
        let options = letters("abcde");

        let mut r1 = Randomizer::new("seed");
        assert_eq!(r1.shuffle(&options), letters("dabce"));
        assert_eq!(r1.shuffle(&options), letters("acebd"));
        assert_eq!(r1.shuffle(&options), letters("cdaeb"));

        let mut r2 = Randomizer::new("seed");
        assert_eq!(r2.shuffle(&options), letters("dabce"));
        assert_eq!(r2.shuffle(&options), letters("acebd"));
        assert_eq!(r2.shuffle(&options), letters("cdaeb"));

        let mut r3 = Randomizer::new("different seed");
        assert_eq!(r3.shuffle(&options), letters("daecb"));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let options = letters("spelling");
        let mut randomizer = Randomizer::new("any seed at all");

        let mut shuffled = randomizer.shuffle(&options);
        assert_eq!(shuffled.len(), options.len());

        let mut expected = options.clone();
        expected.sort_unstable();
        shuffled.sort_unstable();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn shuffles_around_a_letter() {
        let options = letters("abcde");

        let mut r = Randomizer::new("seed");
        assert_eq!(r.shuffle_around(&options, &'e').unwrap(), letters("daecb"));
        assert_eq!(r.shuffle_around(&options, &'e').unwrap(), letters("acebd"));
        assert_eq!(r.shuffle_around(&options, &'e').unwrap(), letters("cdeab"));
    }

    #[test]
    fn shuffle_around_places_element_at_middle_index() {
        let options = letters("abcdefg");
        for (i, element) in options.iter().enumerate() {
            let mut r = Randomizer::new(&format!("seed {i}"));
            let shuffled = r.shuffle_around(&options, element).unwrap();
            assert_eq!(shuffled[(options.len() - 1) / 2], *element);
        }
    }

    #[test]
    fn shuffle_around_missing_element_fails() {
        let options = letters("abcde");

        let mut r = Randomizer::new("seed");
        let err = r.shuffle_around(&options, &'j').unwrap_err();
        assert_eq!(err, RandomError::NotFound("j".to_string()));
        assert_eq!(
            err.to_string(),
            "Element j is not a member of the array to shuffle"
        );
    }

    #[test]
    fn independent_streams_do_not_interfere() {
        let options = letters("abcde");

        let mut r1 = Randomizer::new("seed");
        let _ = r1.shuffle(&options);

        // A second instance starts its own stream from the beginning
        let mut r2 = Randomizer::new("seed");
        assert_eq!(r2.shuffle(&options), letters("dabce"));
    }

    #[test]
    fn next_f64_stays_in_unit_interval() {
        let mut r = Randomizer::new("bounds");
        for _ in 0..10_000 {
            let v = r.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}

//! Mersenne Twister stream compatible with the existing testbench fixtures.
//!
//! The fixtures checked into the consuming testbenches were produced by an
//! MT19937 generator seeded through `init_by_array`, with integers drawn by
//! scaling a 53-bit float and shuffles done by a backwards Fisher-Yates pass.
//! Reproducing that exact call sequence keeps regenerated files byte-identical.

use rand::RngCore;
use rand_mt::Mt;

/// 2^26, the scale applied to the high 27-bit half of a 53-bit draw.
const HIGH_SCALE: f64 = 67_108_864.0;

/// 2^-53, normalizes a 53-bit integer into `[0, 1)`.
const UNIT_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;

/// A seeded MT19937 stream with fixture-compatible sampling.
#[derive(Clone)]
pub struct Mt19937 {
    inner: Mt,
}

impl Mt19937 {
    /// Seeds the stream from an integer seed.
    ///
    /// The seed is split into 32-bit little-endian key words with high zero
    /// words dropped (a zero seed yields the single key word `0`).
    pub fn from_seed(seed: u64) -> Self {
        Self::from_key(&seed_key(seed))
    }

    /// Seeds the stream with an explicit `init_by_array` key.
    pub fn from_key(key: &[u32]) -> Self {
        Self {
            inner: Mt::new_with_key(key.iter().copied()),
        }
    }

    /// Returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// Returns a float uniformly distributed in `[0, 1)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        let high = f64::from(self.next_u32() >> 5);
        let low = f64::from(self.next_u32() >> 6);
        (high * HIGH_SCALE + low) * UNIT_SCALE
    }

    /// Draws an integer uniformly from `low..=high`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn randint(&mut self, low: u32, high: u32) -> u32 {
        assert!(low <= high, "empty range {low}..={high}");
        let span = u64::from(high - low) + 1;
        low + self.below(span) as u32
    }

    /// Permutes `items` in place, walking from the last slot to the second.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// Scales a float draw into `0..span`. Exact for every `span <= 2^32`.
    fn below(&mut self, span: u64) -> u64 {
        (self.next_f64() * span as f64) as u64
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.fill_bytes(dest);
        Ok(())
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Mt19937 { .. }")
    }
}

fn seed_key(seed: u64) -> Vec<u32> {
    let low = seed as u32;
    let high = (seed >> 32) as u32;
    if high == 0 {
        vec![low]
    } else {
        vec![low, high]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_init_by_array_output() {
        let mut mt = Mt19937::from_key(&[0x123, 0x234, 0x345, 0x456]);
        assert_eq!(mt.next_u32(), 1_067_595_299);
    }

    #[test]
    fn default_seed_first_outputs() {
        let mut mt = Mt19937::from_seed(0xdead_beef);
        assert_eq!(mt.next_u32(), 82_178_386);
        assert_eq!(mt.next_u32(), 1_831_771_319);
        assert_eq!(mt.next_u32(), 2_017_055_984);
    }

    #[test]
    fn zero_seed_uses_single_zero_word() {
        let mut a = Mt19937::from_seed(0);
        let mut b = Mt19937::from_key(&[0]);
        assert_eq!(a.next_u32(), 3_626_764_237);
        assert_eq!(b.next_u32(), 3_626_764_237);
    }

    #[test]
    fn wide_seed_uses_two_words() {
        let mut mt = Mt19937::from_seed((1 << 40) + 5);
        assert_eq!(mt.next_u32(), 2_166_296_868);
        assert_eq!(seed_key((1 << 40) + 5), vec![5, 256]);
    }

    #[test]
    fn float_draw_matches_fixture_stream() {
        let mut mt = Mt19937::from_seed(0xdead_beef);
        assert_eq!(mt.next_f64(), 0.019_133_645_493_481_177);
    }

    #[test]
    fn randint_matches_fixture_stream() {
        let mut mt = Mt19937::from_seed(0xdead_beef);
        let bytes: Vec<u32> = (0..5).map(|_| mt.randint(0, 0xff)).collect();
        assert_eq!(bytes, vec![0x04, 0x78, 0x99, 0x6d, 0x9c]);
    }

    #[test]
    fn randint_single_value_range() {
        let mut mt = Mt19937::from_seed(1);
        for _ in 0..10 {
            assert_eq!(mt.randint(7, 7), 7);
        }
    }

    #[test]
    fn randint_full_width_stays_in_range() {
        let mut mt = Mt19937::from_seed(99);
        for _ in 0..1000 {
            let v = mt.randint(10, 20);
            assert!((10..=20).contains(&v));
        }
        // Full u32 span must not overflow.
        mt.randint(0, u32::MAX);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut mt = Mt19937::from_seed(3);
        let mut items: Vec<u32> = (0..50).collect();
        mt.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn usable_as_rand_rng() {
        use rand::Rng;

        let mut a = Mt19937::from_seed(0xdead_beef);
        let mut b = Mt19937::from_seed(0xdead_beef);
        assert_eq!(RngCore::next_u32(&mut a), b.next_u32());
        let v: u8 = a.gen_range(10..20);
        assert!((10..20).contains(&v));
    }

    #[test]
    fn shuffle_empty_and_single() {
        let mut mt = Mt19937::from_seed(3);
        let mut empty: [u8; 0] = [];
        mt.shuffle(&mut empty);
        let mut one = [9u8];
        mt.shuffle(&mut one);
        assert_eq!(one, [9]);
    }
}

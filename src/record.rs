//! Aligned sentence pairs.

/// One aligned (source, target) pair.
///
/// Both sides are trimmed and non-empty when built by [crate::aligner].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    source: String,
    target: String,
}

impl Record {
    pub fn new(source: String, target: String) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of whitespace separated tokens on the source side.
    pub fn source_len(&self) -> usize {
        self.source.split_whitespace().count()
    }

    /// Number of whitespace separated tokens on the target side.
    pub fn target_len(&self) -> usize {
        self.target.split_whitespace().count()
    }

    /// Batching key: [interleave_keys] over token counts (source, target).
    ///
    /// Counts over [u32::MAX] saturate.
    pub fn sort_key(&self) -> u64 {
        let src = u32::try_from(self.source_len()).unwrap_or(u32::MAX);
        let trg = u32::try_from(self.target_len()).unwrap_or(u32::MAX);
        interleave_keys(src, trg)
    }

    pub fn into_inner(self) -> (String, String) {
        (self.source, self.target)
    }
}

/// spread the bits of `x` so that bit `i` lands on bit `2i`.
#[inline]
fn spread(x: u32) -> u64 {
    let mut x = u64::from(x);
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Interleave the bits of `a` and `b` into a single key.
///
/// Bit `i` of `b` goes to bit `2i`, bit `i` of `a` to bit `2i + 1`.
/// Records sorted on this key end up close to records of similar
/// source *and* target length.
pub fn interleave_keys(a: u32, b: u32) -> u64 {
    (spread(a) << 1) | spread(b)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn interleave_small() {
        assert_eq!(interleave_keys(0, 0), 0);
        assert_eq!(interleave_keys(0, 1), 1);
        assert_eq!(interleave_keys(1, 0), 2);
        assert_eq!(interleave_keys(1, 1), 3);
        assert_eq!(interleave_keys(0, 2), 4);
        assert_eq!(interleave_keys(2, 0), 8);
        // a=011, b=101 -> 01 10 11
        assert_eq!(interleave_keys(3, 5), 0b011011);
    }

    #[test]
    fn interleave_extremes() {
        assert_eq!(interleave_keys(u32::MAX, u32::MAX), u64::MAX);
        assert_eq!(interleave_keys(u32::MAX, 0), 0xAAAA_AAAA_AAAA_AAAA);
        assert_eq!(interleave_keys(0, u32::MAX), 0x5555_5555_5555_5555);
    }

    #[test]
    fn interleave_injective() {
        let mut seen = HashSet::with_capacity(1024 * 1024);
        for a in 0..1024 {
            for b in 0..1024 {
                assert!(seen.insert(interleave_keys(a, b)), "collision on ({a}, {b})");
            }
        }
    }

    #[test]
    fn interleave_monotonic() {
        for a in 0..256 {
            for b in 0..256 {
                let key = interleave_keys(a, b);
                assert!(key < interleave_keys(a + 1, b));
                assert!(key < interleave_keys(a, b + 1));
            }
        }
    }

    #[test]
    fn sort_key_uses_token_counts() {
        let r = Record::new("a b c".to_string(), "x y".to_string());
        assert_eq!(r.source_len(), 3);
        assert_eq!(r.target_len(), 2);
        assert_eq!(r.sort_key(), interleave_keys(3, 2));
    }
}

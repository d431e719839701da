/// A 32-bit word. Addition and rotation wrap mod 2^32.
pub type Word = u32;

#[inline]
pub fn add(a: Word, b: Word) -> Word {
    a.wrapping_add(b)
}

/// Circular left rotation; only 1, 5 and 30 are used by the algorithm.
#[inline]
pub fn rotate_left(v: Word, n: u32) -> Word {
    debug_assert!(n > 0 && n < 32, "rotation out of range: {n}");
    v.rotate_left(n)
}

/// Reads a big-endian word from four bytes.
#[inline]
pub fn from_be(bytes: &[u8; 4]) -> Word {
    Word::from_be_bytes(*bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps_around() {
        assert_eq!(add(0xffff_ffff, 1), 0);
        assert_eq!(add(0x8000_0000, 0x8000_0001), 1);
        assert_eq!(add(0x1234, 0x1), 0x1235);
    }

    #[test]
    fn rotate_carries_high_bits_to_low() {
        assert_eq!(rotate_left(0x8000_0000, 1), 1);
        assert_eq!(rotate_left(0x0000_0001, 5), 0x20);
        assert_eq!(rotate_left(0xf000_0000, 5), 0x1e);
        assert_eq!(rotate_left(0x0000_0003, 30), 0xc000_0000);
        assert_eq!(rotate_left(0x6745_2301, 30), 0x59d1_48c0);
    }

    #[test]
    fn big_endian_assembly() {
        assert_eq!(from_be(&[0x61, 0x62, 0x63, 0x80]), 0x6162_6380);
    }
}

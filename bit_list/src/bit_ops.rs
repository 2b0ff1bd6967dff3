//! Bit addressing and single-word shifts.
//!
//! Element `i` lives in word `i / 8` at offset `i % 8`, offset 0 being the
//! least significant bit.

pub(crate) const WORD_BITS: usize = 8;

/// Splits a bit index into its word index and offset.
#[inline(always)]
pub(crate) const fn address(index: usize) -> (usize, usize) {
    (index / WORD_BITS, index % WORD_BITS)
}

/// Number of words needed to hold `bits` elements.
#[inline(always)]
pub(crate) const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

#[inline(always)]
pub(crate) const fn mask(offset: usize) -> u8 {
    1 << offset
}

/// Bits strictly below `offset`. `offset` may be 8.
#[inline(always)]
pub(crate) const fn low_mask(offset: usize) -> u8 {
    ((1u16 << offset) - 1) as u8
}

#[inline(always)]
pub(crate) fn get_bit(word: u8, offset: usize) -> bool {
    word & mask(offset) != 0
}

#[inline(always)]
pub(crate) fn set_bit(word: &mut u8, offset: usize, value: bool) {
    if value {
        *word |= mask(offset);
    } else {
        *word &= !mask(offset);
    }
}

/// Moves the bits at and above `offset` one place toward bit 7, writes `carry`
/// at `offset` and returns the bit pushed out of bit 7.
///
/// With `offset == 0` this is a whole-word shift with `carry` entering at bit 0.
#[inline]
pub(crate) fn shift_up(word: &mut u8, offset: usize, carry: bool) -> bool {
    let out = get_bit(*word, WORD_BITS - 1);
    let below = *word & low_mask(offset);
    let moved = (*word & !low_mask(offset)) << 1;
    *word = below | moved;
    set_bit(word, offset, carry);
    out
}

/// Drops the bit at `offset`, moves the bits above it one place toward bit 0,
/// writes `carry` into bit 7 and returns the dropped bit.
///
/// With `offset == 0` this is a whole-word shift with bit 0 leaving the word.
#[inline]
pub(crate) fn shift_down(word: &mut u8, offset: usize, carry: bool) -> bool {
    let out = get_bit(*word, offset);
    let below = *word & low_mask(offset);
    let moved = (*word & !low_mask(offset + 1)) >> 1;
    *word = below | moved;
    set_bit(word, WORD_BITS - 1, carry);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing() {
        assert_eq!(address(0), (0, 0));
        assert_eq!(address(7), (0, 7));
        assert_eq!(address(8), (1, 0));
        assert_eq!(address(21), (2, 5));

        assert_eq!(words_for(0), 0);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(8), 1);
        assert_eq!(words_for(9), 2);
    }

    #[test]
    fn masks() {
        assert_eq!(mask(0), 0b0000_0001);
        assert_eq!(mask(7), 0b1000_0000);
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(3), 0b0000_0111);
        assert_eq!(low_mask(7), 0b0111_1111);
        assert_eq!(low_mask(8), 0xFF);
    }

    #[test]
    fn set_and_clear() {
        let mut w = 0u8;
        set_bit(&mut w, 2, true);
        set_bit(&mut w, 7, true);
        assert_eq!(w, 0b1000_0100);
        assert!(get_bit(w, 2));
        assert!(!get_bit(w, 3));

        set_bit(&mut w, 2, false);
        assert_eq!(w, 0b1000_0000);
    }

    #[test]
    fn shift_up_splits_at_offset() {
        let mut w = 0b1101_0110;
        let out = shift_up(&mut w, 3, true);
        // bits 0..3 stay, 3..8 move up, bit 3 = carry
        assert_eq!(w, 0b1010_1110);
        assert!(out);

        let mut w = 0b0101_0101;
        let out = shift_up(&mut w, 0, false);
        assert_eq!(w, 0b1010_1010);
        assert!(!out);

        let mut w = 0b1000_0000;
        let out = shift_up(&mut w, 7, false);
        assert_eq!(w, 0);
        assert!(out);
    }

    #[test]
    fn shift_down_splits_at_offset() {
        let mut w = 0b1101_0110;
        let out = shift_down(&mut w, 2, false);
        // bit 2 dropped, 3..8 move down, bit 7 = carry
        assert_eq!(w, 0b0110_1010);
        assert!(out);

        let mut w = 0b0101_0101;
        let out = shift_down(&mut w, 0, true);
        assert_eq!(w, 0b1010_1010);
        assert!(out);

        let mut w = 0b0111_1111;
        let out = shift_down(&mut w, 7, true);
        assert_eq!(w, 0xFF);
        assert!(!out);
    }

    #[test]
    fn shifts_undo_each_other() {
        for word in 0..=u8::MAX {
            for offset in 0..WORD_BITS {
                let mut w = word;
                let top = shift_up(&mut w, offset, true);
                let dropped = shift_down(&mut w, offset, top);
                assert!(dropped);
                assert_eq!(w, word, "word {word:#010b} offset {offset}");
            }
        }
    }
}

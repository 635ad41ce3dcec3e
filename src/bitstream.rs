//! Byte-granular bit packing. Bits are inserted into each byte starting at the
//! most significant free position, and a trailing partial byte is padded with
//! zeros.

/// Number of bits in one packed byte.
pub const BYTE_BITS: u8 = 8;

/// Shift left, treating a shift of the full width as clearing the value.
fn shl(val: u8, amt: u8) -> u8 {
    if amt >= BYTE_BITS {
        return 0;
    }
    val << amt
}

/// Shift right, treating a shift of the full width as clearing the value.
fn shr(val: u8, amt: u8) -> u8 {
    if amt >= BYTE_BITS {
        return 0;
    }
    val >> amt
}

/// Move the leading bits of 'data' into 'dst'.
/// 'data' is left-aligned: its top 'data_left' bits are meaningful. 'dst'
/// holds the bits packed so far right-aligned and has 'dst_left' free slots.
/// min(dst_left, data_left) bits are moved; both counters are decremented by
/// that amount and the moved bits are shifted out of 'data'. Returns the
/// number of bits moved.
pub fn pack_left_bits(
    dst: &mut u8,
    dst_left: &mut u8,
    data: &mut u8,
    data_left: &mut u8,
) -> u8 {
    debug_assert!(*dst_left > 0 && *dst_left <= BYTE_BITS);
    debug_assert!(*data_left > 0 && *data_left <= BYTE_BITS);

    let amt = (*dst_left).min(*data_left);
    *dst = shl(*dst, amt) | shr(*data, BYTE_BITS - amt);
    *data = shl(*data, amt);
    *dst_left -= amt;
    *data_left -= amt;
    amt
}

/// Accumulates symbols of up to 8 bits into bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitWriter {
    /// The byte under construction, right-aligned.
    byte: u8,
    /// Free slots left in 'byte'.
    bits_free: u8,
    /// Total number of bits pushed.
    len: usize,
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            byte: 0,
            bits_free: BYTE_BITS,
            len: 0,
        }
    }

    /// Push the lowest 'num' bits of 'value', most significant first. Returns
    /// the byte that was completed by this push, if any.
    #[must_use]
    pub fn push(&mut self, value: u8, num: u8) -> Option<u8> {
        debug_assert!(num > 0 && num <= BYTE_BITS, "Pushing too many bits");
        let mut data = shl(value, BYTE_BITS - num);
        let mut data_left = num;
        let mut completed = None;

        while data_left > 0 {
            pack_left_bits(
                &mut self.byte,
                &mut self.bits_free,
                &mut data,
                &mut data_left,
            );

            if self.bits_free == 0 {
                // A push of at most 8 bits can't fill two bytes.
                debug_assert!(completed.is_none());
                completed = Some(self.byte);
                self.byte = 0;
                self.bits_free = BYTE_BITS;
            }
        }

        self.len += num as usize;
        completed
    }

    /// Flush the partially filled byte, padded with zero bits. Returns None
    /// if the stream ends on a byte boundary.
    #[must_use]
    pub fn finish(&mut self) -> Option<u8> {
        if self.bits_free == BYTE_BITS {
            return None;
        }
        let last = shl(self.byte, self.bits_free);
        self.byte = 0;
        self.bits_free = BYTE_BITS;
        Some(last)
    }

    /// The number of bits pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Reads bits, most significant first, from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    input: &'a [u8],
    /// Index of the next byte to load.
    pos: usize,
    /// The current byte, left-aligned; consumed bits are shifted out.
    byte: u8,
    /// Unread bits left in 'byte'.
    bits_available: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            byte: 0,
            bits_available: 0,
        }
    }

    /// Read the next 'num' bits and return them right-aligned, or None if the
    /// input ends first.
    #[must_use]
    pub fn pull(&mut self, num: u8) -> Option<u8> {
        debug_assert!(num > 0 && num <= BYTE_BITS, "Taking too many bits");
        let mut value = 0;
        let mut value_free = num;

        while value_free > 0 {
            if self.bits_available == 0 {
                self.byte = *self.input.get(self.pos)?;
                self.pos += 1;
                self.bits_available = BYTE_BITS;
            }
            pack_left_bits(
                &mut value,
                &mut value_free,
                &mut self.byte,
                &mut self.bits_available,
            );
        }
        Some(value)
    }

    /// Read a single bit.
    #[must_use]
    pub fn pull_bit(&mut self) -> Option<bool> {
        Some(self.pull(1)? == 1)
    }

    /// The number of input bytes touched so far. The unread bits of the last
    /// byte are padding once the caller is done.
    #[must_use]
    pub fn consumed_bytes(&self) -> usize {
        self.pos
    }
}

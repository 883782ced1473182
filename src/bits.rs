//! MSB-first bit stream helpers.

/// Bit level reader over a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.pos / 8)?;
        let bit = ((byte >> (7 - (self.pos % 8))) & 1) != 0;
        self.pos += 1;
        Some(bit)
    }

    /// Read `width` (at most 8) bits as an unsigned value. Returns `None` if
    /// fewer than `width` bits remain.
    pub fn read_bits(&mut self, width: u8) -> Option<u8> {
        debug_assert!(width <= 8);
        if self.remaining() < width as usize {
            return None;
        }
        let mut value = 0u8;
        for _ in 0..width {
            value = (value << 1) | self.read_bit()? as u8;
        }
        Some(value)
    }

    #[cfg(test)]
    fn bits_read(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }
}

/// Growable MSB-first bit stream.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    #[cfg(test)]
    fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    #[cfg(test)]
    fn push_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u8, width: u8) {
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 != 0);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.bits.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Pack complete bytes. Trailing bits that do not fill a byte are
    /// discarded.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bits
            .chunks_exact(8)
            .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
            .collect()
    }

    /// Read the stream as one big-endian unsigned integer and return its
    /// shortest byte form. Leading zero bits are dropped and the remainder is
    /// right-aligned, so a stream that is not byte aligned is padded at the
    /// front. An all-zero or empty stream yields no bytes.
    pub fn into_minimal_be_bytes(self) -> Vec<u8> {
        let Some(first_one) = self.bits.iter().position(|&b| b) else {
            return Vec::new();
        };
        let significant = &self.bits[first_one..];
        let pad = (8 - significant.len() % 8) % 8;
        let mut out = Vec::with_capacity((significant.len() + pad) / 8);
        let mut byte = 0u8;
        let mut used = pad;
        for &b in significant {
            byte = (byte << 1) | b as u8;
            used += 1;
            if used == 8 {
                out.push(byte);
                byte = 0;
                used = 0;
            }
        }
        out
    }
}

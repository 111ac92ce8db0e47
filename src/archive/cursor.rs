use byteorder::{ByteOrder, LittleEndian};

/// Bounds-checked little-endian reader over a byte buffer.
///
/// Every read returns `None` once it would pass the end of the buffer;
/// nothing here panics. One cursor is created per buffer and advanced
/// forward only.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Advance without reading
    pub fn skip(&mut self, n: usize) -> Option<()> {
        self.take(n).map(|_| ())
    }

    /// Borrow the next `n` bytes and advance past them
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Some(slice)
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    pub fn read_u16(&mut self) -> Option<u16> {
        self.take(2).map(LittleEndian::read_u16)
    }

    pub fn read_u32(&mut self) -> Option<u32> {
        self.take(4).map(LittleEndian::read_u32)
    }

    /// Advance past bytes up to and including the next NUL; fails if the
    /// buffer ends before one is found
    pub fn skip_until_nul(&mut self) -> Option<()> {
        while let Some(b) = self.read_u8() {
            if b == 0 {
                return Some(());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_reads() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut cur = ByteCursor::new(&data);

        assert_eq!(cur.read_u8(), Some(0x01));
        assert_eq!(cur.read_u16(), Some(0x0302));
        assert_eq!(cur.read_u32(), Some(0x07060504));
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_reads_past_end_fail() {
        let data = [0xAA, 0xBB];
        let mut cur = ByteCursor::new(&data);

        assert_eq!(cur.read_u32(), None);
        // A failed read must not consume anything
        assert_eq!(cur.position(), 0);
        assert_eq!(cur.read_u16(), Some(0xBBAA));
        assert_eq!(cur.read_u8(), None);
    }

    #[test]
    fn test_take_and_skip() {
        let data = [1, 2, 3, 4, 5];
        let mut cur = ByteCursor::new(&data);

        assert_eq!(cur.take(2), Some(&[1u8, 2u8][..]));
        assert_eq!(cur.skip(1), Some(()));
        assert_eq!(cur.take(3), None);
        assert_eq!(cur.take(2), Some(&[4u8, 5u8][..]));
    }

    #[test]
    fn test_skip_until_nul() {
        let data = [b'a', b'b', 0, b'c'];
        let mut cur = ByteCursor::new(&data);

        assert_eq!(cur.skip_until_nul(), Some(()));
        assert_eq!(cur.position(), 3);

        let unterminated = [b'x', b'y'];
        let mut cur = ByteCursor::new(&unterminated);
        assert_eq!(cur.skip_until_nul(), None);
    }
}

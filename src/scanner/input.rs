//! Byte sources feeding the scanner.
//!
//! The scanner pulls its input one byte at a time, which keeps the buffering
//! policy (line-at-a-time, grow on demand) entirely on the scanner's side.
//! Anything that can hand out bytes sequentially qualifies as a source.

use std::io;

/// A pull source of bytes. `None` signals end of stream.
///
/// Every `Iterator<Item = u8>` is a `ByteSource`, so `text.bytes()`,
/// `vec.into_iter()` and friends work directly.
pub trait ByteSource {
    fn next_byte(&mut self) -> Option<u8>;
}

impl<I: Iterator<Item = u8>> ByteSource for I {
    fn next_byte(&mut self) -> Option<u8> {
        self.next()
    }
}

/// Adapts any [`io::Read`] into a byte iterator (and therefore a
/// [`ByteSource`]).
///
/// Read errors other than interruption end the stream; the scanner treats a
/// short source the same as a finished one.
pub struct ReadSource<R> {
    inner: R,
}

impl<R: io::Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        ReadSource { inner }
    }
}

impl<R: io::Read> Iterator for ReadSource<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_bytes_are_a_source() {
        let mut source = "ab".bytes();
        assert_eq!(source.next_byte(), Some(b'a'));
        assert_eq!(source.next_byte(), Some(b'b'));
        assert_eq!(source.next_byte(), None);
        assert_eq!(source.next_byte(), None);
    }

    #[test]
    fn read_source_drains_a_reader() {
        let data: &[u8] = b"xy";
        let mut source = ReadSource::new(data);
        assert_eq!(source.next_byte(), Some(b'x'));
        assert_eq!(source.next_byte(), Some(b'y'));
        assert_eq!(source.next_byte(), None);
    }
}

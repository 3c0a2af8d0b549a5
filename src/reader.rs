use std::io::Read;

use crate::error::Error;

/// A pull-based source of bytes the decoder reads through.
///
/// The decoder never needs to look further ahead than one item header at a
/// time, so this trait only asks for two operations: pull exactly `n` bytes,
/// or report whether any bytes remain at all. This mirrors the
/// bounds-checked slice-advance style of a hand-rolled binary-tree parser,
/// generalized so it can be implemented over a borrowed slice *or* an
/// arbitrary `std::io::Read` (a borrow-only reader over a fixed buffer
/// can't do the latter).
pub(crate) trait ByteSource {
    /// Pulls exactly `n` bytes, or fails with [`Error::UnexpectedEof`] if
    /// fewer remain.
    fn pull(&mut self, n: usize) -> Result<Vec<u8>, Error>;

    /// Reports whether the source has no more bytes to offer.
    fn at_eof(&mut self) -> Result<bool, Error>;
}

/// A [`ByteSource`] over an in-memory slice.
pub(crate) struct SliceSource<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    pub(crate) fn new(buffer: &'a [u8]) -> Self {
        SliceSource {
            buffer,
            position: 0,
        }
    }

    /// Byte offset into the original slice consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

impl<'a> ByteSource for SliceSource<'a> {
    fn pull(&mut self, n: usize) -> Result<Vec<u8>, Error> {
        let end = self
            .position
            .checked_add(n)
            .ok_or(Error::UnexpectedEof)?;
        if end > self.buffer.len() {
            return Err(Error::UnexpectedEof);
        }
        let slice = &self.buffer[self.position..end];
        self.position = end;
        Ok(slice.to_vec())
    }

    fn at_eof(&mut self) -> Result<bool, Error> {
        Ok(self.position >= self.buffer.len())
    }
}

/// A [`ByteSource`] over any [`std::io::Read`].
///
/// Keeps a single byte of lookahead so [`ByteSource::at_eof`] can be
/// answered without an extra `Read` trait bound (`Read` alone has no way to
/// ask "is there more?" short of attempting a read).
pub(crate) struct IoSource<R> {
    inner: R,
    pending: Option<u8>,
}

impl<R: Read> IoSource<R> {
    pub(crate) fn new(inner: R) -> Self {
        IoSource {
            inner,
            pending: None,
        }
    }
}

fn map_eof(err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        Error::UnexpectedEof
    } else {
        Error::Io(err)
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn pull(&mut self, n: usize) -> Result<Vec<u8>, Error> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let mut out = vec![0u8; n];
        let mut start = 0;
        if let Some(byte) = self.pending.take() {
            out[0] = byte;
            start = 1;
        }
        if start < n {
            self.inner.read_exact(&mut out[start..]).map_err(map_eof)?;
        }
        Ok(out)
    }

    fn at_eof(&mut self) -> Result<bool, Error> {
        if self.pending.is_some() {
            return Ok(false);
        }
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(true),
                Ok(_) => {
                    self.pending = Some(byte[0]);
                    return Ok(false);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }
}

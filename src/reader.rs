//! Minimal read-only file abstraction, with a default `read_fully` that
//! loops a buffered reader until EOF or completion.

use std::io;

/// A readable, seekable view onto archive entry contents.
///
/// Implementations typically wrap a driver-owned cursor into the backing
/// archive stream; this crate never implements one itself — stream-level
/// I/O is a driver concern.
pub trait ReadOnlyFile {
    /// Reads up to `buf.len()` bytes, returning the number of bytes
    /// actually read (`0` signals EOF), mirroring [`io::Read::read`].
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Reads until `buf` is completely filled or the source is exhausted.
    /// Returns the total number of bytes read, which is less than
    /// `buf.len()` only at EOF.
    fn read_fully(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut total = 0;
        while total < buf.len() {
            match self.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }
}

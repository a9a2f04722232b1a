//! Two-page sliding window over a byte stream
//!
//! The window owns a fixed 2×P byte arena. Only the first `len` bytes are
//! valid; everything handed out is a checked slice of that prefix.

use std::io::{self, Read};

/// Fixed-capacity buffer holding the two most recently loaded pages
#[derive(Debug)]
pub struct Window {
    buf: Box<[u8]>,
    page_size: usize,
    len: usize,
    eof: bool,
}

impl Window {
    /// Allocate an empty window of two pages
    pub fn new(page_size: usize) -> Self {
        Self {
            buf: vec![0u8; 2 * page_size].into_boxed_slice(),
            page_size,
            len: 0,
            eof: false,
        }
    }

    /// Fill the whole window from the start of `reader`
    ///
    /// Bytes received before a failure stay valid, so a caller that chooses
    /// to treat the failure as end of stream keeps them.
    pub fn fill<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        self.len = 0;
        self.eof = false;
        self.read_up_to(reader, self.buf.len())
    }

    /// Drop the first page, move the second into its place and load a new one
    ///
    /// Every offset into the window moves down by `page_size`.
    pub fn cycle<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        let page = self.page_size;
        if self.len > page {
            self.buf.copy_within(page..self.len, 0);
            self.len -= page;
        } else {
            self.len = 0;
        }

        if self.eof {
            return Ok(());
        }
        self.read_up_to(reader, self.len + page)
    }

    /// Read until `target` bytes are valid or the stream ends
    fn read_up_to<R: Read>(&mut self, reader: &mut R, target: usize) -> io::Result<()> {
        while self.len < target {
            match reader.read(&mut self.buf[self.len..target]) {
                Ok(0) => {
                    self.eof = true;
                    break;
                }
                Ok(n) => self.len += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Stop reading further pages; the current contents are final
    pub fn mark_eof(&mut self) {
        self.eof = true;
    }

    /// Valid bytes currently buffered
    pub fn valid(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of valid bytes currently buffered
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the stream is known to have no more data
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Page size in bytes
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total resident capacity (two pages)
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

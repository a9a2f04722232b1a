//! Growable buffer collecting line bytes across page cycles

/// Holds the bytes of the line currently being scanned
///
/// Capacity doubles whenever an append would overflow it, so lines of any
/// length are supported with amortized O(1) growth per byte.
#[derive(Debug)]
pub struct LineAccumulator {
    buf: Vec<u8>,
}

impl LineAccumulator {
    /// Create an accumulator with the given starting capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Append bytes, doubling capacity until they fit
    pub fn append(&mut self, bytes: &[u8]) {
        let needed = self.buf.len() + bytes.len();
        if needed > self.buf.capacity() {
            let mut capacity = self.buf.capacity().max(1);
            while capacity < needed {
                capacity *= 2;
            }
            self.buf.reserve_exact(capacity - self.buf.len());
        }
        self.buf.extend_from_slice(bytes);
    }

    /// Bytes collected so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of bytes collected so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current capacity in bytes
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Forget the collected bytes, keeping the allocation
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

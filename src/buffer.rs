//! Growable text buffer shared by every conversion, plus the per-thread pool
//! that recycles buffers between chains.
//!
//! A `Buffer` only ever holds valid UTF-8. Growth goes through
//! `String::try_reserve`, which doubles capacity, so a failed allocation surfaces
//! as [`Error::OutOfMemory`] instead of aborting.

use std::{cell::RefCell, fmt};

use crate::error::Error;

/// Maximum number of idle buffers kept per thread.
const POOL_LIMIT: usize = 8;
/// Buffers that grew beyond this are released instead of pooled.
const MAX_POOLED_CAPACITY: usize = 64 * 1024;

thread_local! {
    static POOL: RefCell<Vec<Buffer>> = const { RefCell::new(Vec::new()) };
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    data: String,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes an idle buffer from the current thread's pool, or a fresh empty one.
    pub fn acquire() -> Self {
        POOL.try_with(|pool| pool.borrow_mut().pop())
            .ok()
            .flatten()
            .inspect(|buf| log::trace!("reusing pooled buffer ({} bytes)", buf.capacity()))
            .unwrap_or_default()
    }

    /// Returns a buffer to the current thread's pool. Empty-capacity and
    /// oversized buffers are simply dropped.
    pub fn release(mut self) {
        if self.capacity() == 0 || self.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        self.clear();
        let _ = POOL.try_with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < POOL_LIMIT {
                pool.push(self);
            }
        });
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Truncates to length zero, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Shortens the buffer to `len` bytes. `len` must sit on a char boundary.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Ensures room for `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        self.data
            .try_reserve(additional)
            .map_err(|_| Error::OutOfMemory)
    }

    pub fn push_str(&mut self, s: &str) -> Result<(), Error> {
        self.reserve(s.len())?;
        self.data.push_str(s);
        Ok(())
    }

    pub fn push(&mut self, c: char) -> Result<(), Error> {
        self.reserve(c.len_utf8())?;
        self.data.push(c);
        Ok(())
    }

    /// Appends `count` copies of `c` after a single reservation.
    pub fn push_repeated(&mut self, c: char, count: usize) -> Result<(), Error> {
        let bytes = c.len_utf8().checked_mul(count).ok_or(Error::OutOfMemory)?;
        self.reserve(bytes)?;
        self.data.extend(std::iter::repeat_n(c, count));
        Ok(())
    }

    /// Replaces the contents with `s`.
    pub fn set(&mut self, s: &str) -> Result<(), Error> {
        self.clear();
        self.push_str(s)
    }

    /// Appends the `Display` rendering of `value`.
    pub fn push_display(&mut self, value: impl fmt::Display) -> Result<(), Error> {
        fmt::Write::write_fmt(self, format_args!("{}", value)).map_err(|_| Error::OutOfMemory)
    }

    pub fn into_string(self) -> String {
        self.data
    }

    /// Copies the text into an exactly sized `String` and returns the buffer to the pool.
    pub fn finish(self) -> String {
        let text = self.data.as_str().to_owned();
        self.release();
        text
    }
}

impl fmt::Write for Buffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map_err(|_| fmt::Error)
    }
}

impl From<String> for Buffer {
    fn from(data: String) -> Self {
        Self { data }
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

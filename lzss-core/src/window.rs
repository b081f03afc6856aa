//! Ring window (sliding history plus lookahead) for LZSS.
//!
//! The window holds the last `capacity` bytes of the uncompressed stream.
//! The encoder additionally keeps up to `lookahead` not-yet-encoded bytes
//! starting at the cursor; the decoder only appends at the cursor.
//!
//! # Mirrored tail
//!
//! The backing buffer is `capacity + lookahead - 1` bytes long. Writes to
//! the first `lookahead - 1` positions are repeated past the end, so the
//! `lookahead` bytes starting at any position are always one contiguous
//! slice (see [`RingWindow::run`]). Match comparison never has to wrap.

use crate::error::{LzssError, Result};

/// A fixed-capacity circular byte window.
#[derive(Debug, Clone)]
pub struct RingWindow {
    /// Backing storage including the mirrored tail.
    buffer: Vec<u8>,
    /// Addressable history size (power of 2).
    capacity: usize,
    /// Maximum lookahead / match length.
    lookahead: usize,
    /// Mask for efficient modulo (capacity - 1).
    mask: usize,
    /// Position of the first unencoded byte (encoder) or next write (decoder).
    cursor: usize,
    /// Number of stream bytes that have passed the cursor (up to capacity).
    history: usize,
    /// Byte the window is filled with before any data arrives.
    filler: u8,
}

impl RingWindow {
    /// Create a new window.
    ///
    /// The cursor starts `lookahead` bytes before the physical end of the
    /// history region, so the initial lookahead is contiguous.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a power of 2 or if `lookahead` is zero
    /// or not smaller than `capacity`.
    pub fn new(capacity: usize, lookahead: usize, filler: u8) -> Self {
        assert!(
            capacity.is_power_of_two(),
            "Capacity must be a power of 2, got {}",
            capacity
        );
        assert!(
            lookahead > 0 && lookahead < capacity,
            "Lookahead must be in 1..{}, got {}",
            capacity,
            lookahead
        );

        Self {
            buffer: vec![filler; capacity + lookahead - 1],
            capacity,
            lookahead,
            mask: capacity - 1,
            cursor: capacity - lookahead,
            history: 0,
            filler,
        }
    }

    /// Get the history capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the lookahead length.
    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// Get the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of real bytes behind the cursor that back-references may use.
    pub fn history(&self) -> usize {
        self.history
    }

    /// Get the filler byte.
    pub fn filler(&self) -> u8 {
        self.filler
    }

    /// Refill with the filler byte and move the cursor back to its start.
    pub fn reset(&mut self) {
        self.buffer.fill(self.filler);
        self.cursor = self.capacity - self.lookahead;
        self.history = 0;
    }

    /// Reduce any position to its slot in the window.
    #[inline]
    pub fn wrap(&self, pos: usize) -> usize {
        pos & self.mask
    }

    /// Read the byte at `pos`.
    #[inline]
    pub fn read(&self, pos: usize) -> u8 {
        self.buffer[pos & self.mask]
    }

    /// Write `byte` at `pos`, keeping the mirrored tail in sync.
    #[inline]
    pub fn write(&mut self, pos: usize, byte: u8) {
        let slot = pos & self.mask;
        self.buffer[slot] = byte;
        if slot < self.lookahead - 1 {
            self.buffer[slot + self.capacity] = byte;
        }
    }

    /// The `lookahead` bytes starting at `pos`, as one slice.
    #[inline]
    pub fn run(&self, pos: usize) -> &[u8] {
        let slot = pos & self.mask;
        &self.buffer[slot..slot + self.lookahead]
    }

    /// Position just past the lookahead.
    ///
    /// This is the oldest history slot; the next incoming byte lands here.
    #[inline]
    pub fn tail(&self) -> usize {
        (self.cursor + self.lookahead) & self.mask
    }

    /// Slide the window by one byte.
    ///
    /// `next` is stored at [`tail`](Self::tail) when present. With `None`
    /// the oldest byte is simply forgotten and the lookahead shrinks.
    pub fn slide(&mut self, next: Option<u8>) {
        if let Some(byte) = next {
            let tail = self.tail();
            self.write(tail, byte);
        }
        self.advance();
    }

    /// Append a byte at the cursor and advance (decoder side).
    pub fn push(&mut self, byte: u8) {
        self.write(self.cursor, byte);
        self.advance();
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor = (self.cursor + 1) & self.mask;
        if self.history < self.capacity {
            self.history += 1;
        }
    }

    /// Backward distance from the cursor to `pos`.
    #[inline]
    pub fn distance_to(&self, pos: usize) -> usize {
        self.cursor.wrapping_sub(pos) & self.mask
    }

    /// Read a byte at the given distance behind the cursor.
    ///
    /// Distance 1 is the most recently pushed byte.
    pub fn read_at_distance(&self, distance: usize) -> Result<u8> {
        if distance == 0 || distance > self.history {
            return Err(LzssError::invalid_distance(distance, self.history));
        }

        Ok(self.read(self.cursor.wrapping_sub(distance)))
    }
}

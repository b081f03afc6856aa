//! # LZSS Core
//!
//! Core components shared by the LZSS encoder and decoder.
//!
//! - [`window`]: Ring window with a mirrored tail for wrap-free comparisons
//! - [`io`]: Byte-oriented reader/writer collaborators
//! - [`traits`]: Compressor/decompressor traits and stream statistics
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```rust
//! use lzss_core::RingWindow;
//!
//! let mut window = RingWindow::new(4096, 18, b' ');
//! window.push(b'A');
//! window.push(b'B');
//!
//! assert_eq!(window.read_at_distance(2).unwrap(), b'A');
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod io;
pub mod traits;
pub mod window;

// Re-exports for convenience
pub use error::{LzssError, Result};
pub use io::{ByteReader, ByteWriter};
pub use traits::{Compressor, Decompressor, StreamStats};
pub use window::RingWindow;

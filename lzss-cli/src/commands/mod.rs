//! Command implementations for the LZSS CLI.

pub mod decode;
pub mod encode;
pub mod info;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use info::cmd_info;

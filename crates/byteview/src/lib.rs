//! Mutable byte buffers with shared-storage views.
//!
//! This crate ports the JS `Buffer` binary API (the npm `buffer` polyfill is
//! the upstream reference) to Rust. The central type is [`ByteBuf`]: a view
//! (offset + length) over a reference-counted, fixed-length storage block.
//! Cloning and [`ByteBuf::slice`] share storage, so mutation through one view
//! is visible through every aliasing view — the upstream aliasing model,
//! preserved on purpose.
//!
//! The API splits into two families, as upstream: structural operations
//! (indexing, `slice`, `copy`, `fill`, `concat`) clamp and no-op instead of
//! failing, while fixed-width numeric reads/writes and encoding-name lookup
//! fail loudly with [`BufError`].
//!
//! # Example
//!
//! ```
//! use byteview::{ByteBuf, Encoding};
//!
//! let buf = ByteBuf::from_text("hello world", Encoding::Utf8);
//! let world = buf.slice(6, None);
//! assert_eq!(world.to_text(Encoding::Utf8, 0, None), "world");
//!
//! // Views alias: writing through one is seen by the other.
//! world.set(0, b'W');
//! assert_eq!(buf.to_text(Encoding::Utf8, 0, None), "hello World");
//! ```

use thiserror::Error;

mod buf;
mod concat;
mod json;
mod num;
mod search;
mod storage;

pub use buf::ByteBuf;
pub use concat::ByteSource;
pub use storage::Storage;

pub use byteview_encodings::{Encoding, EncodingError};

/// Error type for buffer operations.
///
/// Only the strict family of operations produces these; see the crate docs
/// for the permissive/strict split.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufError {
    /// A numeric read or write would run past the end of the view.
    #[error("offset out of range")]
    OutOfRange,
    /// Unrecognized encoding name.
    #[error(transparent)]
    InvalidEncoding(#[from] EncodingError),
    /// A value that cannot be used where it was passed.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

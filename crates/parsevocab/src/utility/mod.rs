//! # Utilities

pub mod utf8;

#[doc(inline)]
pub use utf8::{truncate_utf8, utf8_chars, utf8_len};

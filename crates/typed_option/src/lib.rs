#![no_std]

//! An optional value that is either `O::Some(value)` or `O::None`.
//!
//! `O` is a closed two-variant enum with combinators that never run a
//! callback they do not need: `map`/`flat_map` skip `None`, and the lazy
//! defaulting forms (`get_or_else_with`, `or_else_with`) skip `Some`.

// O module
pub mod o;
pub use o::*;

pub mod nullable;
pub use nullable::Nullable;

pub mod error;
pub use error::NoneError;

#[cfg(feature = "serde")]
mod serde_impl;

//! Maskgen encodes a sparse set of signed integers as a single arbitrary-precision bitmask, plus the derived strings a code generator needs to embed a membership test in a runtime that has shift/and operators but no native set type.
//!
//! ## Pipeline:
//!
//! - **Parse**: [`IntSet::parse`] turns free-form text into an ordered, duplicate-free set of `i64`, silently dropping anything that is not an exact base-10 integer.
//!
//! - **Encode**: [`Encoding::build`] maps each in-range value `v` to bit `v - min` of a [`num::BigUint`] mask, resolving the domain `[min, max]` from explicit [`Bounds`] or from the set's extremes. Values outside the domain are clipped and reported, not lost.
//!
//! - **Render**: [`Encoding::render`] derives the five presentation strings: the mask in decimal and fixed-width binary, the bit-index offset, and two Lua membership-test expressions.
//!
//! # Examples
//!
//! ```
//! use maskgen::{Bounds, Encoding};
//!
//! let enc = Encoding::from_text("-4, -2, 1, 3, 5", Bounds::AUTO)?;
//! assert_eq!(enc.width(), 10);
//! assert_eq!(enc.offset(), 4);
//!
//! let out = enc.render();
//! assert_eq!(out.const_dec, "677");
//! assert_eq!(out.const_bin, "1010100101");
//! assert_eq!(out.lua_readable, "(677 >> (x+4)) & 1 == 1");
//! assert_eq!(out.lua_compact, "677 >> x+4 & 1 == 1");
//! # Ok::<(), maskgen::MaskErr>(())
//! ```
//!
//! Clipping with an explicit domain:
//!
//! ```
//! use maskgen::{Bounds, Encoding};
//!
//! let enc = Encoding::from_text("1, 2, 3", Bounds::from(0..=1))?;
//! assert_eq!(enc.out_of_range(), &[2, 3]);
//! assert!(enc.contains(1));
//! assert!(!enc.contains(2));
//! # Ok::<(), maskgen::MaskErr>(())
//! ```

use thiserror::Error;

mod encode;
mod render;
mod set;

#[cfg(test)]
mod testutil;

pub use encode::{Bounds, Encoding};
pub use render::Output;
pub use set::IntSet;

/// Terminal failures of the encoding pipeline.
///
/// Out-of-range values are not an error; they are reported on a successful
/// [`Encoding`] via [`Encoding::out_of_range`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskErr {
    #[error("integer set is empty")]
    EmptyInput,

    #[error("min must not exceed max ({min} > {max})")]
    InvalidRange { min: i64, max: i64 },
}

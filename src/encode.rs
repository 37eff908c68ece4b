use std::ops::RangeInclusive;

use itertools::Itertools;
use num::{BigUint, Zero};

use crate::{IntSet, MaskErr};

/// Optional explicit domain bounds for an [`Encoding`].
///
/// Each bound is resolved independently: a `Some` value overrides the
/// corresponding extreme of the input set, a `None` falls back to it. The
/// default ([`Bounds::AUTO`]) infers both bounds from the set.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Bounds {
    /// Infer both bounds from the input set.
    pub const AUTO: Self = Bounds { min: None, max: None };

    /// Overrides the lower bound, leaving the upper bound as-is.
    #[inline]
    pub fn with_min(self, min: i64) -> Self {
        Self { min: Some(min), ..self }
    }

    /// Overrides the upper bound, leaving the lower bound as-is.
    #[inline]
    pub fn with_max(self, max: i64) -> Self {
        Self { max: Some(max), ..self }
    }
}

impl From<RangeInclusive<i64>> for Bounds {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self {
            min: Some(*range.start()),
            max: Some(*range.end()),
        }
    }
}

/// A set of integers encoded as an arbitrary-precision bitmask over the
/// domain `[min, max]`.
///
/// Bit `v - min` of the mask is set for every in-range value `v` of the
/// source set. Values outside the domain are clipped: they contribute no bit
/// but are recorded in [`out_of_range`](Self::out_of_range) so a caller can
/// surface them as a non-fatal advisory. The mask never has a set bit at or
/// above [`width`](Self::width).
///
/// An `Encoding` is constructed once per request and never mutated.
///
/// # Examples
///
/// ```
/// use maskgen::{Bounds, Encoding, IntSet};
///
/// let set = IntSet::parse("0, 2, 3");
/// let enc = Encoding::build(&set, Bounds::AUTO)?;
///
/// assert_eq!(enc.mask(), &num::BigUint::from(0b1101u32));
/// assert_eq!(enc.width(), 4);
/// assert!(enc.contains(2));
/// assert!(!enc.contains(1));
/// # Ok::<(), maskgen::MaskErr>(())
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Encoding {
    mask: BigUint,
    min: i64,
    max: i64,
    out_of_range: Vec<i64>,
}

impl Encoding {
    /// Encodes `set` over the domain resolved from `bounds`.
    ///
    /// Fails with [`MaskErr::EmptyInput`] when `set` is empty and with
    /// [`MaskErr::InvalidRange`] when an explicit `min` exceeds the resolved
    /// `max`. A domain admitting none of the set's values is valid and
    /// produces a zero mask with everything reported out of range.
    pub fn build(set: &IntSet, bounds: Bounds) -> Result<Self, MaskErr> {
        let (Some(first), Some(last)) = (set.first(), set.last()) else {
            return Err(MaskErr::EmptyInput);
        };

        let min = bounds.min.unwrap_or(first);
        let max = bounds.max.unwrap_or(last);
        if min > max {
            return Err(MaskErr::InvalidRange { min, max });
        }

        let mut mask = BigUint::zero();
        let mut out_of_range = Vec::new();
        for v in set.iter() {
            if v < min || v > max {
                out_of_range.push(v);
            } else {
                mask.set_bit(v.abs_diff(min), true);
            }
        }

        Ok(Self { mask, min, max, out_of_range })
    }

    /// Parses `text` with [`IntSet::parse`] and encodes the result.
    pub fn from_text(text: &str, bounds: Bounds) -> Result<Self, MaskErr> {
        Self::build(&IntSet::parse(text), bounds)
    }

    /// The bitmask. Bit `i` corresponds to domain value `min + i`.
    #[inline]
    pub fn mask(&self) -> &BigUint {
        &self.mask
    }

    /// The resolved lower bound of the domain.
    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// The resolved upper bound of the domain.
    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of bit positions spanned by the domain: `max - min + 1`.
    #[inline]
    pub fn width(&self) -> u64 {
        self.max.abs_diff(self.min) + 1
    }

    /// The additive shift mapping a domain value `x` to its bit index
    /// `x + offset`; always `-min`.
    #[inline]
    pub fn offset(&self) -> i64 {
        -self.min
    }

    /// Input values that fell outside the domain, ascending. Empty when
    /// nothing was clipped.
    #[inline]
    pub fn out_of_range(&self) -> &[i64] {
        &self.out_of_range
    }

    /// Returns `true` if `value` is a member of the encoded set.
    ///
    /// This is the native evaluation of the generated Lua expressions:
    /// shift the mask right by the value's bit index and test the low bit.
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max && self.mask.bit(value.abs_diff(self.min))
    }

    /// Iterates over the encoded members in ascending order, decoded back
    /// from the mask.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        (self.min..=self.max).filter(|&v| self.mask.bit(v.abs_diff(self.min)))
    }

    /// Advisory text listing the clipped values, or `None` when nothing was
    /// clipped.
    pub fn clip_advisory(&self) -> Option<String> {
        if self.out_of_range.is_empty() {
            None
        } else {
            Some(format!(
                "ignored out-of-range values: {}",
                self.out_of_range.iter().join(", ")
            ))
        }
    }
}

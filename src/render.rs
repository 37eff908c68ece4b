use std::fmt;

use crate::Encoding;

/// The five presentation strings derived from an [`Encoding`].
///
/// A pure function of the encoding: the mask in decimal and in fixed-width
/// binary, the offset as signed decimal text, and the two generated Lua
/// membership-test expressions.
///
/// # Examples
///
/// ```
/// use maskgen::{Bounds, Encoding};
///
/// let out = Encoding::from_text("0, 2, 3", Bounds::AUTO)?.render();
/// assert_eq!(out.const_dec, "13");
/// assert_eq!(out.const_bin, "1101");
/// assert_eq!(out.offset, "0");
/// assert_eq!(out.lua_readable, "(13 >> (x)) & 1 == 1");
/// assert_eq!(out.lua_compact, "13 >> x & 1 == 1");
/// # Ok::<(), maskgen::MaskErr>(())
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Output {
    /// The mask as a base-10 digit string; `"0"` for a zero mask.
    pub const_dec: String,
    /// The mask as a base-2 digit string, left-padded with `'0'` to exactly
    /// `width` characters.
    pub const_bin: String,
    /// The offset as a signed base-10 integer string.
    pub offset: String,
    /// Parenthesized Lua membership test, e.g. `(677 >> (x+4)) & 1 == 1`.
    pub lua_readable: String,
    /// Minimal Lua membership test, e.g. `677 >> x+4 & 1 == 1`.
    pub lua_compact: String,
}

impl Encoding {
    /// Renders this encoding into its five presentation strings.
    #[inline]
    pub fn render(&self) -> Output {
        Output::from(self)
    }
}

impl From<&Encoding> for Output {
    fn from(enc: &Encoding) -> Self {
        let const_dec = enc.mask().to_str_radix(10);
        let width = enc.width() as usize;
        let const_bin = format!("{:0>width$}", enc.mask().to_str_radix(2));

        let offset = enc.offset();
        // The signed literal is reproduced verbatim, so a negative offset
        // renders as e.g. `x+-4`.
        let term = if offset == 0 {
            "x".to_owned()
        } else {
            format!("x+{offset}")
        };
        let lua_readable = format!("({const_dec} >> ({term})) & 1 == 1");
        let lua_compact = format!("{const_dec} >> {term} & 1 == 1");

        Output {
            const_dec,
            const_bin,
            offset: offset.to_string(),
            lua_readable,
            lua_compact,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dec:      {}", self.const_dec)?;
        writeln!(f, "bin:      {}", self.const_bin)?;
        writeln!(f, "offset:   {}", self.offset)?;
        writeln!(f, "readable: {}", self.lua_readable)?;
        write!(f, "compact:  {}", self.lua_compact)
    }
}

//! A Unicode code point: from U+0000 to U+10FFFF, surrogates included.

use crate::{compose_surrogates, is_high_surrogate, is_low_surrogate};
use core::fmt;
use core::iter::{FusedIterator, Peekable};
use core::num::NonZeroU16;


/// A Unicode code point: from U+0000 to U+10FFFF.
///
/// Unlike `char`, which is a Unicode scalar value, a `CodePoint` may be a
/// surrogate (U+D800 to U+DFFF). This is what a lone surrogate decodes to.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
pub struct CodePoint {
    value: u32,
}

/// Format the code point as `U+` followed by four to six hexadecimal digits.
/// Example: `U+1F4A9`
impl fmt::Debug for CodePoint {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value)
    }
}

/// Format the code point as `U+1F4A9 '💩'`, or just `U+D83D` for surrogates
/// which have no printable form.
impl fmt::Display for CodePoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.categorize() {
            CodePointCategory::Scalar(c) => {
                write!(formatter, "U+{:04X} '{}'", self.value, c.escape_debug())
            }
            CodePointCategory::Surrogate(_) => write!(formatter, "U+{:04X}", self.value),
        }
    }
}

impl CodePoint {
    #[inline]
    pub(crate) const fn from_unit(unit: u16) -> CodePoint {
        CodePoint { value: unit as u32 }
    }

    #[inline]
    pub(crate) fn from_pair(high: u16, low: u16) -> CodePoint {
        debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
        let value = compose_surrogates(high, low);
        debug_assert!((0x10000..=0x10FFFF).contains(&value));
        CodePoint { value }
    }

    /// Creates a new `CodePoint` if the value is a valid code point.
    ///
    /// Returns `None` if `value` is above 0x10FFFF.
    #[inline]
    pub fn from_u32(value: u32) -> Option<CodePoint> {
        match value {
            0..=0x10FFFF => Some(CodePoint { value }),
            _ => None,
        }
    }

    /// Creates a new `CodePoint` from a `char`.
    #[inline]
    pub fn from_char(value: char) -> CodePoint {
        CodePoint {
            value: value as u32,
        }
    }

    /// Creates a new `CodePoint` from a [Surrogate].
    #[inline]
    pub fn from_surrogate(value: Surrogate) -> CodePoint {
        CodePoint::from_unit(value.to_u16())
    }

    /// Returns the numeric value of the code point.
    #[inline]
    pub fn to_u32(&self) -> u32 {
        self.value
    }

    /// Returns the number of UTF-16 code units needed to encode this code point.
    ///
    /// Supplementary code points take two, everything else (surrogates
    /// included) takes one.
    #[inline]
    pub fn len_utf16(&self) -> usize {
        if self.value >= 0x1_0000 {
            2
        } else {
            1
        }
    }

    /// Optionally returns a Unicode scalar value for the code point.
    ///
    /// Returns `None` if the code point is a surrogate.
    #[inline]
    pub fn to_char(&self) -> Option<char> {
        match self.categorize() {
            CodePointCategory::Scalar(c) => Some(c),
            _ => None,
        }
    }

    /// Returns a Unicode scalar value for the code point.
    ///
    /// Returns `'\u{FFFD}'` (the replacement character “�”)
    /// if the code point is a surrogate.
    #[inline]
    pub fn to_char_lossy(&self) -> char {
        self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Optionally returns the surrogate this code point is.
    #[inline]
    pub fn to_surrogate(&self) -> Option<Surrogate> {
        match self.categorize() {
            CodePointCategory::Surrogate(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a [CodePointCategory], categorizing the code point as a surrogate
    /// or a valid Unicode scalar.
    #[inline]
    pub fn categorize(&self) -> CodePointCategory {
        match u16::try_from(self.value).ok().and_then(Surrogate::from_u16) {
            Some(surrogate) => CodePointCategory::Surrogate(surrogate),
            None => match char::from_u32(self.value) {
                Some(c) => CodePointCategory::Scalar(c),
                // Every constructor keeps the value at or below 0x10FFFF:
                // `from_u32` checks it, `from_unit` is bounded by u16 and
                // `from_pair` composes into 0x10000..=0x10FFFF. Outside the
                // surrogate block that leaves only scalars.
                None => unreachable!("U+{:04X} is neither a scalar nor a surrogate", self.value),
            },
        }
    }

    /// Decode potentially ill-formed UTF-16.
    ///
    /// Surrogate pairs decode to one supplementary code point, and every lone
    /// surrogate decodes to itself. No code unit is ever dropped or replaced.
    #[inline]
    pub fn decode_utf16<I>(input: I) -> DecodeUtf16<I::IntoIter>
    where
        I: IntoIterator<Item = u16>,
    {
        DecodeUtf16 {
            input: input.into_iter().peekable(),
        }
    }

    /// Encode potentially ill-formed UTF-16.
    #[inline]
    pub fn encode_utf16<I>(input: I) -> EncodeUtf16<I::IntoIter>
    where
        I: IntoIterator<Item = CodePoint>,
    {
        EncodeUtf16 {
            input: input.into_iter(),
            buf: None,
        }
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<Surrogate> for CodePoint {
    #[inline]
    fn from(s: Surrogate) -> Self {
        Self::from_surrogate(s)
    }
}

impl From<CodePointCategory> for CodePoint {
    #[inline]
    fn from(cat: CodePointCategory) -> Self {
        match cat {
            CodePointCategory::Scalar(c) => Self::from_char(c),
            CodePointCategory::Surrogate(s) => Self::from_surrogate(s),
        }
    }
}

/// Which half of a surrogate pair a [Surrogate] belongs in.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
pub enum SurrogateKind {
    /// U+D800 to U+DBFF, the leading half.
    High,
    /// U+DC00 to U+DFFF, the trailing half.
    Low,
}

/// A Unicode high or low surrogate: from U+D800 to U+DFFF.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
pub struct Surrogate {
    // Surrogates are never zero, so Option<Surrogate> packs into 2 bytes.
    value: NonZeroU16,
}

/// Format the surrogate as `U+` followed by four hexadecimal digits.
/// Example: `U+D83D`
impl fmt::Debug for Surrogate {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value)
    }
}

impl Surrogate {
    /// Creates a new `Surrogate` if the value is a valid Unicode surrogate.
    ///
    /// Returns `None` if `value` is below 0xD800 or above 0xDFFF.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Surrogate> {
        match value {
            0xD800..=0xDFFF => NonZeroU16::new(value).map(|value| Surrogate { value }),
            _ => None,
        }
    }

    /// Returns the numeric value of the surrogate.
    #[inline]
    pub fn to_u16(&self) -> u16 {
        self.value.get()
    }

    /// Returns whether this is a high or a low surrogate.
    #[inline]
    pub fn kind(&self) -> SurrogateKind {
        if is_high_surrogate(self.to_u16()) {
            SurrogateKind::High
        } else {
            SurrogateKind::Low
        }
    }

    /// Returns `true` if the surrogate is a high surrogate (from U+D800 to U+DBFF)
    /// and `false` if the surrogate is a low surrogate (from U+DC00 to U+DFFF).
    #[inline]
    pub fn is_high_surrogate(&self) -> bool {
        self.kind() == SurrogateKind::High
    }
}

/// An enum that separates a Unicode code point into two options:
/// valid Unicode scalar, or surrogate.
///
/// Returned from the [`categorize`] method on [CodePoint].
///
/// [`categorize`]: CodePoint::categorize
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Debug)]
pub enum CodePointCategory {
    Scalar(char),
    Surrogate(Surrogate),
}

/// An iterator for decoding potentially ill-formed UTF-16.
pub struct DecodeUtf16<I>
where
    I: Iterator<Item = u16>,
{
    input: Peekable<I>,
}
impl<I> Iterator for DecodeUtf16<I>
where
    I: Iterator<Item = u16>,
{
    type Item = CodePoint;

    #[inline]
    fn next(&mut self) -> Option<CodePoint> {
        let unit = self.input.next()?;

        if is_high_surrogate(unit) {
            if let Some(low) = self.input.next_if(|&next| is_low_surrogate(next)) {
                return Some(CodePoint::from_pair(unit, low));
            }
        }

        Some(CodePoint::from_unit(unit))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l, h) = self.input.size_hint();
        (l.saturating_add(1) / 2, h)
    }
}
impl<I> FusedIterator for DecodeUtf16<I> where I: FusedIterator<Item = u16> {}

/// An iterator for encoding potentially ill-formed UTF-16.
pub struct EncodeUtf16<I>
where
    I: Iterator<Item = CodePoint>,
{
    input: I,
    buf: Option<u16>,
}
impl<I> Iterator for EncodeUtf16<I>
where
    I: Iterator<Item = CodePoint>,
{
    type Item = u16;

    #[inline]
    fn next(&mut self) -> Option<u16> {
        if let Some(x) = self.buf.take() {
            return Some(x);
        }

        let p = self.input.next()?.to_u32();
        if p >= 0x1_0000 {
            self.buf = Some(((p - 0x1_0000) & 0x3FF) as u16 | 0xDC00);
            Some(((p - 0x1_0000) >> 10) as u16 | 0xD800)
        } else {
            Some(p as u16)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l, h) = self.input.size_hint();
        let buffered = self.buf.is_some() as usize;
        (
            l.saturating_add(buffered),
            h.and_then(|x| x.checked_mul(2))
                .and_then(|x| x.checked_add(buffered)),
        )
    }
}
impl<I> FusedIterator for EncodeUtf16<I> where I: FusedIterator<Item = CodePoint> {}

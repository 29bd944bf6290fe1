//! A borrowed sequence of UTF-16 code units.

use crate::codepoint::{CodePoint, DecodeUtf16};
use crate::report::Report;
use crate::validate::{self, Defect, Defects, Validation};
use crate::{is_high_surrogate, is_low_surrogate};
use core::fmt;
use core::iter::{Copied, FusedIterator, Peekable};
use core::ops::Index;
use core::slice::{self, SliceIndex};

#[cfg(test)]
mod tests;

/// A sequence of UTF-16 code units that may or may not be well-formed.
///
/// This is to `[u16]` what `str` is to `[u8]`, except that nothing is
/// checked on construction: lone surrogates are stored as-is and only
/// reported by [`validate`](Self::validate).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CodeUnits {
    units: [u16],
}

impl CodeUnits {
    /// Wraps anything that can be viewed as `[u16]`.
    #[inline]
    pub fn new<T: ?Sized + AsRef<[u16]>>(units: &T) -> &CodeUnits {
        let units = units.as_ref();
        // Safety: repr(transparent) over [u16], and any [u16] is a valid `CodeUnits`.
        unsafe { &*(units as *const [u16] as *const CodeUnits) }
    }

    /// Returns the underlying code units.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.units
    }

    /// Returns the length, in code units.
    ///
    /// A surrogate pair counts as two and a lone surrogate as one, well-formed
    /// or not.
    #[inline]
    pub fn len(&self) -> usize {
        validate::length(&self.units)
    }

    /// Returns whether this is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns a sub-sequence for the given range of code units, or `None` if
    /// it is out of bounds.
    ///
    /// Any in-bounds range is accepted, even one that splits a surrogate pair.
    #[inline]
    pub fn get<I>(&self, range: I) -> Option<&CodeUnits>
    where
        I: SliceIndex<[u16], Output = [u16]>,
    {
        self.units.get(range).map(CodeUnits::new)
    }

    /// Scans the sequence for lone surrogates.
    #[inline]
    pub fn validate(&self) -> Validation {
        validate::validate(&self.units)
    }

    /// Returns whether the sequence contains no lone surrogate.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        validate::is_well_formed(&self.units)
    }

    /// Returns a lazy iterator over the lone surrogates, in position order.
    #[inline]
    pub fn defects(&self) -> Defects<'_> {
        Defects::new(&self.units)
    }

    /// Returns an iterator over the code points.
    ///
    /// Pairs decode to supplementary code points and lone surrogates decode to
    /// themselves, so nothing is lost.
    #[inline]
    pub fn code_points(&self) -> CodePoints<'_> {
        CodePoint::decode_utf16(self.units.iter().copied())
    }

    /// Returns an iterator over the code points and the code unit offset each
    /// one starts at.
    #[inline]
    pub fn code_point_indices(&self) -> CodePointIndices<'_> {
        CodePointIndices {
            units: self.units.iter(),
            len: self.units.len(),
        }
    }

    /// Returns the number of code points, where a lone surrogate counts as
    /// one.
    pub fn code_point_count(&self) -> usize {
        self.code_points().count()
    }

    /// Splits the sequence into well-formed runs and lone surrogates.
    #[inline]
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            units: &self.units,
            offset: 0,
            defects: self.defects().peekable(),
        }
    }

    /// Renders a human-readable report of the code units and any defects.
    #[inline]
    pub fn describe(&self) -> Report<'_> {
        Report::new(self)
    }
}

impl AsRef<CodeUnits> for [u16] {
    #[inline]
    fn as_ref(&self) -> &CodeUnits {
        CodeUnits::new(self)
    }
}

impl AsRef<[u16]> for CodeUnits {
    #[inline]
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl AsRef<CodeUnits> for CodeUnits {
    #[inline]
    fn as_ref(&self) -> &CodeUnits {
        self
    }
}

impl<'a> From<&'a [u16]> for &'a CodeUnits {
    #[inline]
    fn from(units: &'a [u16]) -> &'a CodeUnits {
        CodeUnits::new(units)
    }
}

/// Returns a sub-sequence for the given range of code units.
///
/// # Panics
///
/// Panics when the range is out of bounds.
impl<I> Index<I> for CodeUnits
where
    I: SliceIndex<[u16], Output = [u16]>,
{
    type Output = CodeUnits;

    #[inline]
    fn index(&self, index: I) -> &CodeUnits {
        CodeUnits::new(&self.units[index])
    }
}

impl<'a> IntoIterator for &'a CodeUnits {
    type Item = u16;
    type IntoIter = Copied<slice::Iter<'a, u16>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.units.iter().copied()
    }
}

/// Formats as an escaped, quoted string with lone surrogates as `\u{d83d}`.
impl fmt::Debug for CodeUnits {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;

        formatter.write_str("\"")?;

        for code_point in self.code_points() {
            match code_point.to_char() {
                Some(c) => {
                    for ch in c.escape_debug() {
                        formatter.write_char(ch)?;
                    }
                }
                None => write!(formatter, "\\u{{{:x}}}", code_point.to_u32())?,
            }
        }

        formatter.write_str("\"")
    }
}

/// Formats lossily, replacing every lone surrogate with `"\u{FFFD}"`.
impl fmt::Display for CodeUnits {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;

        for code_point in self.code_points() {
            formatter.write_char(code_point.to_char_lossy())?;
        }

        Ok(())
    }
}

/// Iterator of code points over a sequence, created by
/// [`code_points`](CodeUnits::code_points).
pub type CodePoints<'a> = DecodeUtf16<Copied<slice::Iter<'a, u16>>>;

/// Iterator of code points and their starting offset, created by
/// [`code_point_indices`](CodeUnits::code_point_indices).
#[derive(Clone, Debug)]
pub struct CodePointIndices<'a> {
    units: slice::Iter<'a, u16>,
    len: usize,
}

impl Iterator for CodePointIndices<'_> {
    type Item = (usize, CodePoint);

    #[inline]
    fn next(&mut self) -> Option<(usize, CodePoint)> {
        let position = self.len - self.units.len();
        let unit = *self.units.next()?;

        if is_high_surrogate(unit) {
            if let Some(&low) = self.units.as_slice().first() {
                if is_low_surrogate(low) {
                    self.units.next();
                    return Some((position, CodePoint::from_pair(unit, low)));
                }
            }
        }

        Some((position, CodePoint::from_unit(unit)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len();
        (remaining.saturating_add(1) / 2, Some(remaining))
    }
}
impl FusedIterator for CodePointIndices<'_> {}

/// Part of a code unit sequence.
///
/// Either a maximal [`WellFormed`](Self::WellFormed) run, or a single
/// [`Lone`](Self::Lone) surrogate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Utf16Chunk<'a> {
    /// A run without lone surrogates.
    WellFormed(&'a CodeUnits),

    /// One lone surrogate, with where it sits in the whole sequence.
    Lone(Defect),
}

impl<'a> Utf16Chunk<'a> {
    /// Returns `Some(_)` if the chunk is well-formed, and `None` if not.
    #[inline]
    pub fn well_formed(self) -> Option<&'a CodeUnits> {
        match self {
            Utf16Chunk::WellFormed(units) => Some(units),
            Utf16Chunk::Lone(_) => None,
        }
    }
}

/// An iterator created by [`chunks`](CodeUnits::chunks).
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    units: &'a [u16],
    offset: usize,
    defects: Peekable<Defects<'a>>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Utf16Chunk<'a>;

    fn next(&mut self) -> Option<Utf16Chunk<'a>> {
        if self.offset >= self.units.len() {
            return None;
        }

        match self.defects.peek().copied() {
            Some(defect) if defect.position == self.offset => {
                self.defects.next();
                self.offset += 1;
                Some(Utf16Chunk::Lone(defect))
            }
            next => {
                let end = next.map_or(self.units.len(), |defect| defect.position);
                let run = &self.units[self.offset..end];
                self.offset = end;
                Some(Utf16Chunk::WellFormed(CodeUnits::new(run)))
            }
        }
    }
}
impl FusedIterator for Chunks<'_> {}

impl PartialEq<[u16]> for CodeUnits {
    #[inline]
    fn eq(&self, other: &[u16]) -> bool {
        self.units == *other
    }
}

impl PartialEq<CodeUnits> for [u16] {
    #[inline]
    fn eq(&self, other: &CodeUnits) -> bool {
        *self == other.units
    }
}

//! An owned, growable sequence of UTF-16 code units.

use crate::{CodePoint, CodeUnits};
use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::convert::Infallible;
use core::fmt;
use core::iter::FromIterator;
use core::ops::Deref;
use core::str::FromStr;

#[cfg(test)]
mod tests;

/// An owned sequence of UTF-16 code units that may or may not be
/// well-formed.
///
/// Appending is plain concatenation of code units: pushing a low surrogate
/// right after a lone high surrogate completes the pair.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodeUnitBuf {
    units: Vec<u16>,
}

impl CodeUnitBuf {
    /// Creates a new, empty sequence.
    #[inline]
    pub const fn new() -> CodeUnitBuf {
        CodeUnitBuf { units: Vec::new() }
    }

    /// Creates a new, empty sequence with room for `capacity` code units.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CodeUnitBuf {
        CodeUnitBuf {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of raw code units without checking them.
    ///
    /// This never fails: lone surrogates are kept as they are.
    #[inline]
    pub fn from_units(units: Vec<u16>) -> CodeUnitBuf {
        CodeUnitBuf { units }
    }

    /// Encodes a UTF-8 `&str` slice as UTF-16.
    ///
    /// The result is always well-formed.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(str: &str) -> CodeUnitBuf {
        CodeUnitBuf {
            units: str.encode_utf16().collect(),
        }
    }

    /// Returns the number of code units this buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    /// Reserves capacity for at least `additional` more code units.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.units.reserve(additional)
    }

    /// Clears the sequence.
    #[inline]
    pub fn clear(&mut self) {
        self.units.clear()
    }

    /// Shortens the sequence to `new_len` code units.
    ///
    /// This may split a surrogate pair, leaving a lone high surrogate at the end.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.units.truncate(new_len)
    }

    /// Returns the borrowed view of this sequence.
    #[inline]
    pub fn as_code_units(&self) -> &CodeUnits {
        CodeUnits::new(&self.units)
    }

    /// Consumes the buffer and returns its code units.
    #[inline]
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Appends one raw code unit, surrogate or not.
    #[inline]
    pub fn push_unit(&mut self, unit: u16) {
        self.units.push(unit)
    }

    /// Appends a Unicode scalar value, as one or two code units.
    #[inline]
    pub fn push_char(&mut self, c: char) {
        let mut buf = [0; 2];
        self.units.extend_from_slice(c.encode_utf16(&mut buf))
    }

    /// Appends a code point; a surrogate code point is pushed as a single unit.
    #[inline]
    pub fn push(&mut self, code_point: CodePoint) {
        self.units.extend(CodePoint::encode_utf16([code_point]))
    }

    /// Appends a UTF-8 slice, encoded as UTF-16.
    #[inline]
    pub fn push_str(&mut self, other: &str) {
        self.units.extend(other.encode_utf16())
    }

    /// Appends another code unit sequence.
    #[inline]
    pub fn push_units(&mut self, other: &CodeUnits) {
        self.units.extend_from_slice(other.as_slice())
    }
}

impl Deref for CodeUnitBuf {
    type Target = CodeUnits;
    #[inline]
    fn deref(&self) -> &CodeUnits {
        self.as_code_units()
    }
}

impl From<Vec<u16>> for CodeUnitBuf {
    #[inline]
    fn from(units: Vec<u16>) -> CodeUnitBuf {
        CodeUnitBuf::from_units(units)
    }
}
impl From<&[u16]> for CodeUnitBuf {
    #[inline]
    fn from(units: &[u16]) -> CodeUnitBuf {
        CodeUnitBuf::from_units(units.to_vec())
    }
}
impl From<&str> for CodeUnitBuf {
    #[inline]
    fn from(x: &str) -> CodeUnitBuf {
        CodeUnitBuf::from_str(x)
    }
}
impl From<String> for CodeUnitBuf {
    #[inline]
    fn from(x: String) -> CodeUnitBuf {
        CodeUnitBuf::from_str(&x)
    }
}
impl From<&CodeUnits> for CodeUnitBuf {
    #[inline]
    fn from(x: &CodeUnits) -> CodeUnitBuf {
        x.to_owned()
    }
}
impl From<CodeUnitBuf> for Vec<u16> {
    #[inline]
    fn from(x: CodeUnitBuf) -> Vec<u16> {
        x.into_units()
    }
}

impl AsRef<CodeUnits> for CodeUnitBuf {
    #[inline]
    fn as_ref(&self) -> &CodeUnits {
        self
    }
}
impl AsRef<[u16]> for CodeUnitBuf {
    #[inline]
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}
impl Borrow<CodeUnits> for CodeUnitBuf {
    #[inline]
    fn borrow(&self) -> &CodeUnits {
        self
    }
}

impl FromStr for CodeUnitBuf {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(CodeUnitBuf::from_str(s))
    }
}

impl ToOwned for CodeUnits {
    type Owned = CodeUnitBuf;

    #[inline]
    fn to_owned(&self) -> CodeUnitBuf {
        CodeUnitBuf::from_units(self.as_slice().to_vec())
    }
}

impl FromIterator<u16> for CodeUnitBuf {
    fn from_iter<T: IntoIterator<Item = u16>>(iter: T) -> CodeUnitBuf {
        CodeUnitBuf::from_units(iter.into_iter().collect())
    }
}

impl FromIterator<char> for CodeUnitBuf {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> CodeUnitBuf {
        let mut string = CodeUnitBuf::new();
        string.extend(iter);
        string
    }
}

/// Creates a sequence from code points; surrogate code points become lone
/// code units unless two of them happen to form a pair.
impl FromIterator<CodePoint> for CodeUnitBuf {
    fn from_iter<T: IntoIterator<Item = CodePoint>>(iter: T) -> CodeUnitBuf {
        let mut string = CodeUnitBuf::new();
        string.extend(iter);
        string
    }
}

impl<'a> FromIterator<&'a str> for CodeUnitBuf {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> CodeUnitBuf {
        let mut string = CodeUnitBuf::new();
        string.extend(iter);
        string
    }
}

impl Extend<u16> for CodeUnitBuf {
    #[inline]
    fn extend<T: IntoIterator<Item = u16>>(&mut self, iter: T) {
        self.units.extend(iter)
    }
}

impl<'a> Extend<&'a u16> for CodeUnitBuf {
    #[inline]
    fn extend<T: IntoIterator<Item = &'a u16>>(&mut self, iter: T) {
        self.units.extend(iter.into_iter().copied())
    }
}

impl Extend<char> for CodeUnitBuf {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        let iterator = iter.into_iter();
        let (low, _high) = iterator.size_hint();
        // Lower bound of one code unit per char (BMP only)
        self.units.reserve(low);
        for c in iterator {
            self.push_char(c);
        }
    }
}

impl Extend<CodePoint> for CodeUnitBuf {
    #[inline]
    fn extend<T: IntoIterator<Item = CodePoint>>(&mut self, iter: T) {
        self.units.extend(CodePoint::encode_utf16(iter))
    }
}

impl<'a> Extend<&'a str> for CodeUnitBuf {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for s in iter {
            self.push_str(s);
        }
    }
}

impl<'a> Extend<&'a CodeUnits> for CodeUnitBuf {
    fn extend<T: IntoIterator<Item = &'a CodeUnits>>(&mut self, iter: T) {
        for units in iter {
            self.push_units(units);
        }
    }
}

impl fmt::Debug for CodeUnitBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_code_units(), f)
    }
}

impl fmt::Display for CodeUnitBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_code_units(), f)
    }
}

impl PartialEq<CodeUnits> for CodeUnitBuf {
    #[inline]
    fn eq(&self, other: &CodeUnits) -> bool {
        self.as_code_units() == other
    }
}

impl PartialEq<[u16]> for CodeUnitBuf {
    #[inline]
    fn eq(&self, other: &[u16]) -> bool {
        self.units == other
    }
}

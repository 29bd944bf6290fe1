//! Well-formedness of UTF-16 code unit sequences.
//!
//! Validation never fails: a malformed sequence is a classification outcome,
//! reported as a list of [`Defect`]s. Whether that is acceptable is left to
//! the caller.

use crate::codepoint::SurrogateKind;
use crate::{is_high_surrogate, is_low_surrogate};
use alloc::vec::Vec;
use core::iter::{Enumerate, FusedIterator};
use core::{fmt, slice};
use serde::{Deserialize, Serialize};


/// Returns the length of `units`, in UTF-16 code units.
///
/// This is the raw unit count: a surrogate pair counts as two, and a lone
/// surrogate counts as one. It is defined for malformed input too.
#[inline]
pub fn length<T: ?Sized + AsRef<[u16]>>(units: &T) -> usize {
    units.as_ref().len()
}

/// Scans `units` once and reports every lone surrogate, in position order.
pub fn validate<T: ?Sized + AsRef<[u16]>>(units: &T) -> Validation {
    let units = units.as_ref();
    let defects: Vec<Defect> = Defects::new(units).collect();

    match defects.first().map(|defect| defect.position) {
        None => {
            tracing::trace!(len = units.len(), "well-formed UTF-16");
            Validation::WellFormed
        }
        Some(first) => {
            tracing::debug!(
                len = units.len(),
                defects = defects.len(),
                first,
                "malformed UTF-16"
            );
            Validation::Malformed { defects }
        }
    }
}

/// Returns whether `units` contains no lone surrogate.
///
/// Stops at the first defect.
#[inline]
pub fn is_well_formed<T: ?Sized + AsRef<[u16]>>(units: &T) -> bool {
    Defects::new(units.as_ref()).next().is_none()
}

/// The kind of a [`Defect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectKind {
    /// A high surrogate not immediately followed by a low surrogate.
    LoneHighSurrogate,
    /// A low surrogate not immediately preceded by an unpaired high surrogate.
    LoneLowSurrogate,
}

impl From<SurrogateKind> for DefectKind {
    #[inline]
    fn from(kind: SurrogateKind) -> Self {
        match kind {
            SurrogateKind::High => DefectKind::LoneHighSurrogate,
            SurrogateKind::Low => DefectKind::LoneLowSurrogate,
        }
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DefectKind::LoneHighSurrogate => "lone high surrogate",
            DefectKind::LoneLowSurrogate => "lone low surrogate",
        })
    }
}

/// A lone surrogate found at `position` (an index into the code units).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Defect {
    pub position: usize,
    pub kind: DefectKind,
}

impl Defect {
    #[inline]
    fn lone_high(position: usize) -> Defect {
        Defect {
            position,
            kind: DefectKind::LoneHighSurrogate,
        }
    }

    #[inline]
    fn lone_low(position: usize) -> Defect {
        Defect {
            position,
            kind: DefectKind::LoneLowSurrogate,
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)
    }
}

/// The outcome of [`validate`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validation {
    WellFormed,
    /// Holds at least one defect, sorted by position.
    Malformed { defects: Vec<Defect> },
}

impl Validation {
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        matches!(self, Validation::WellFormed)
    }

    /// Returns the defects found, which is empty for well-formed input.
    #[inline]
    pub fn defects(&self) -> &[Defect] {
        match self {
            Validation::WellFormed => &[],
            Validation::Malformed { defects } => defects.as_slice(),
        }
    }
}

/// A lazy [`validate`]: yields the lone surrogates of a sequence, in position
/// order.
///
/// Created by [`CodeUnits::defects`](crate::CodeUnits::defects).
#[derive(Clone, Debug)]
pub struct Defects<'a> {
    units: Enumerate<slice::Iter<'a, u16>>,
    // A high surrogate waiting for its low half.
    pending: Option<usize>,
}

impl<'a> Defects<'a> {
    #[inline]
    pub(crate) fn new(units: &'a [u16]) -> Defects<'a> {
        Defects {
            units: units.iter().enumerate(),
            pending: None,
        }
    }
}

impl Iterator for Defects<'_> {
    type Item = Defect;

    fn next(&mut self) -> Option<Defect> {
        for (position, &unit) in self.units.by_ref() {
            if is_high_surrogate(unit) {
                if let Some(lone) = self.pending.replace(position) {
                    return Some(Defect::lone_high(lone));
                }
            } else if is_low_surrogate(unit) {
                if self.pending.take().is_none() {
                    return Some(Defect::lone_low(position));
                }
            } else if let Some(lone) = self.pending.take() {
                return Some(Defect::lone_high(lone));
            }
        }

        self.pending.take().map(Defect::lone_high)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, h) = self.units.size_hint();
        let pending = self.pending.is_some() as usize;
        (0, h.and_then(|h| h.checked_add(pending)))
    }
}
impl FusedIterator for Defects<'_> {}

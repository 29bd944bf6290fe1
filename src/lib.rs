#![no_std]

//! # utf16-probe
//!
//! Well-formedness checks for potentially ill-formed UTF-16.
//!
//! A [`CodeUnits`] sequence is never rejected at construction: it always has a
//! [`length`] in code units, and [`validate`] separately reports every lone
//! surrogate it contains.
//!
//! ```
//! use utf16_probe::{CodeUnits, DefectKind};
//!
//! let units = CodeUnits::new(&[0x41_u16, 0x42, 0x43, 0x3A, 0x20, 0xD83D]);
//! assert_eq!(units.len(), 6);
//!
//! let defects = units.validate().defects().to_vec();
//! assert_eq!(defects.len(), 1);
//! assert_eq!(defects[0].position, 5);
//! assert_eq!(defects[0].kind, DefectKind::LoneHighSurrogate);
//! ```
extern crate alloc;

pub mod codepoint;
pub mod report;
pub mod transcode;
pub mod unitbuf;
pub mod units;
pub mod validate;

pub use codepoint::{CodePoint, Surrogate, SurrogateKind};
pub use report::{describe, Report, ReportOptions};
pub use transcode::{EncodePolicy, ToUtf8Error};
pub use unitbuf::CodeUnitBuf;
pub use units::CodeUnits;
pub use validate::{is_well_formed, length, validate, Defect, DefectKind, Validation};

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

#[inline]
fn compose_surrogates(high: u16, low: u16) -> u32 {
    0x1_0000 + ((((high - 0xD800) as u32) << 10) | (low - 0xDC00) as u32)
}

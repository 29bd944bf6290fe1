//! Re-encoding code units as UTF-8.
//!
//! A well-formed sequence has exactly one UTF-8 form. A malformed one does
//! not, so the caller picks what happens to lone surrogates with an
//! [`EncodePolicy`].

use crate::validate::Defect;
use crate::{CodePoint, CodeUnits};
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};


/// What to do with lone surrogates when encoding as UTF-8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodePolicy {
    /// Fail with [`ToUtf8Error`] at the first lone surrogate.
    #[default]
    Reject,
    /// Substitute one U+FFFD (the replacement character “�”) per lone surrogate.
    Replace,
    /// Encode lone surrogates as three-byte sequences anyway (WTF-8).
    ///
    /// The output is not UTF-8 unless the input was well-formed, but no code
    /// unit is lost.
    PassThrough,
}

/// Errors which can occur when converting [`CodeUnits`] to UTF-8 under
/// [`EncodePolicy::Reject`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot encode {defect} as UTF-8")]
pub struct ToUtf8Error {
    defect: Defect,
}

impl ToUtf8Error {
    /// Returns the first lone surrogate in the input.
    #[inline]
    pub fn defect(&self) -> Defect {
        self.defect
    }

    /// Returns the index, in code units, up to which the input was
    /// well-formed.
    ///
    /// It is the maximum index such that `units[..index].to_utf8()` would
    /// return `Ok(_)`.
    #[inline]
    pub fn valid_up_to(&self) -> usize {
        self.defect.position
    }
}

impl CodeUnits {
    /// Encodes the sequence as UTF-8 (or WTF-8, for
    /// [`PassThrough`](EncodePolicy::PassThrough)).
    ///
    /// Only [`EncodePolicy::Reject`] can fail.
    pub fn encode(&self, policy: EncodePolicy) -> Result<Vec<u8>, ToUtf8Error> {
        match policy {
            EncodePolicy::Reject => self.to_utf8().map(String::into_bytes),
            EncodePolicy::Replace => Ok(self.to_string_lossy().into_bytes()),
            EncodePolicy::PassThrough => Ok(self.to_wtf8()),
        }
    }

    /// Tries to convert the sequence to a UTF-8 `String`.
    ///
    /// Returns `Err(_)` if the sequence contains a lone surrogate.
    pub fn to_utf8(&self) -> Result<String, ToUtf8Error> {
        if let Some(defect) = self.defects().next() {
            tracing::debug!(
                len = self.len(),
                position = defect.position,
                kind = ?defect.kind,
                "refusing to encode malformed UTF-16"
            );
            return Err(ToUtf8Error { defect });
        }

        Ok(self.code_points().map(|c| c.to_char_lossy()).collect())
    }

    /// Lossily converts the sequence to UTF-8.
    ///
    /// Lone surrogates are replaced with `"\u{FFFD}"` (the replacement
    /// character “�”).
    pub fn to_string_lossy(&self) -> String {
        let mut replaced = 0usize;
        let string = self
            .code_points()
            .map(|c| {
                c.to_char().unwrap_or_else(|| {
                    replaced += 1;
                    char::REPLACEMENT_CHARACTER
                })
            })
            .collect();

        if replaced > 0 {
            tracing::debug!(len = self.len(), replaced, "replaced lone surrogates");
        }
        string
    }

    /// Converts the sequence to WTF-8 bytes.
    ///
    /// This is lossless: well-formed input gives plain UTF-8, and each lone
    /// surrogate becomes its three-byte generalized UTF-8 form.
    pub fn to_wtf8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        let mut passed = 0usize;

        for code_point in self.code_points() {
            if code_point.to_surrogate().is_some() {
                passed += 1;
            }
            push_wtf8(&mut bytes, code_point);
        }

        if passed > 0 {
            tracing::debug!(len = self.len(), passed, "passed lone surrogates through as WTF-8");
        }
        bytes
    }
}

fn push_wtf8(bytes: &mut Vec<u8>, code_point: CodePoint) {
    const TAG_CONT: u8 = 0b1000_0000;
    const TAG_TWO_B: u8 = 0b1100_0000;
    const TAG_THREE_B: u8 = 0b1110_0000;
    const TAG_FOUR_B: u8 = 0b1111_0000;

    let code = code_point.to_u32();
    match code {
        0..=0x7F => bytes.push(code as u8),
        0x80..=0x7FF => bytes.extend_from_slice(&[
            (code >> 6 & 0x1F) as u8 | TAG_TWO_B,
            (code & 0x3F) as u8 | TAG_CONT,
        ]),
        0x800..=0xFFFF => bytes.extend_from_slice(&[
            (code >> 12 & 0x0F) as u8 | TAG_THREE_B,
            (code >> 6 & 0x3F) as u8 | TAG_CONT,
            (code & 0x3F) as u8 | TAG_CONT,
        ]),
        _ => bytes.extend_from_slice(&[
            (code >> 18 & 0x07) as u8 | TAG_FOUR_B,
            (code >> 12 & 0x3F) as u8 | TAG_CONT,
            (code >> 6 & 0x3F) as u8 | TAG_CONT,
            (code & 0x3F) as u8 | TAG_CONT,
        ]),
    }
}

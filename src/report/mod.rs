//! Human-readable reports of a code unit sequence.

use crate::validate::Validation;
use crate::CodeUnits;
use core::fmt;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// What a [`Report`] shows.
///
/// Deserializable so it can sit in an application's own configuration;
/// missing fields take their default.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    /// List every code unit in hexadecimal.
    pub show_code_units: bool,
    /// List every code point with the code unit offset it starts at.
    pub show_code_points: bool,
    /// Print hexadecimal digits in upper case.
    pub uppercase_hex: bool,
    /// List at most this many defects; `None` lists them all.
    pub max_defects: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            show_code_units: true,
            show_code_points: false,
            uppercase_hex: false,
            max_defects: None,
        }
    }
}

/// Renders `units` and their well-formedness with the default options.
///
/// ```
/// use utf16_probe::describe;
///
/// let report = describe(&[0x7C_u16, 0xD83D, 0x7C]).to_string();
/// assert!(report.contains("lone high surrogate at position 1"));
/// ```
#[inline]
pub fn describe<T: ?Sized + AsRef<[u16]>>(units: &T) -> Report<'_> {
    Report::new(CodeUnits::new(units))
}

/// A report on one sequence, printed through `Display`.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    units: &'a CodeUnits,
    validation: Validation,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    /// Validates `units` and prepares a report with the default options.
    pub fn new(units: &'a CodeUnits) -> Report<'a> {
        Report {
            units,
            validation: units.validate(),
            options: ReportOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: ReportOptions) -> Report<'a> {
        self.options = options;
        self
    }

    /// The outcome the report is about.
    #[inline]
    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    fn write_hex(&self, f: &mut fmt::Formatter<'_>, value: u32) -> fmt::Result {
        if self.options.uppercase_hex {
            write!(f, "{:#X}", value)
        } else {
            write!(f, "{:#x}", value)
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.units.len();
        writeln!(
            f,
            "{:?} ({} code unit{})",
            self.units,
            len,
            if len == 1 { "" } else { "s" }
        )?;

        if self.options.show_code_units {
            f.write_str("  code units = [")?;
            for (i, unit) in self.units.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                self.write_hex(f, unit.into())?;
            }
            f.write_str("]\n")?;
        }

        if self.options.show_code_points {
            for (position, code_point) in self.units.code_point_indices() {
                writeln!(f, "  {} starts at code unit {}", code_point, position)?;
            }
        }

        let defects = self.validation.defects();
        if defects.is_empty() {
            return f.write_str("  well formed");
        }

        write!(
            f,
            "  malformed: {} defect{}",
            defects.len(),
            if defects.len() == 1 { "" } else { "s" }
        )?;

        let shown = self.options.max_defects.unwrap_or(defects.len());
        for defect in defects.iter().take(shown) {
            write!(f, "\n    {} (", defect)?;
            self.write_hex(f, self.units.as_slice()[defect.position].into())?;
            f.write_str(")")?;
        }
        if defects.len() > shown {
            write!(f, "\n    ... and {} more", defects.len() - shown)?;
        }

        Ok(())
    }
}

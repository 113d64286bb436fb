//! GS report record and rendering.
//!
//! The report record is assembled once per scoring run and handed to its
//! consumer unchanged: rendered as console text (Display), serialized as
//! JSON, or written as a one-row CSV file.

use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::GlomscoreError;

/// A two-sided confidence interval for a binomial proportion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound, in [0, 1].
    pub lower: f64,
    /// Upper bound, in [0, 1].
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Returns the interval with both bounds rounded to 4 decimal places.
    pub fn rounded(&self) -> ConfidenceInterval {
        ConfidenceInterval {
            lower: round4(self.lower),
            upper: round4(self.upper),
        }
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.lower, self.upper)
    }
}

/// The result of a glomerulosclerosis scoring run.
///
/// Immutable once assembled. The `proportion` and `confidence_interval`
/// fields hold the reportable 4-decimal values; the `exact_*` fields keep
/// the unrounded results for programmatic reuse.
#[derive(Clone, Debug, Serialize)]
pub struct GsReport {
    /// Total number of glomeruli seen across both collections.
    pub glomeruli_seen: u64,

    /// Number of globally sclerosed glomeruli.
    pub glomeruli_sclerosed: u64,

    /// Proportion of sclerosed glomeruli, rounded to 4 decimal places.
    pub proportion: f64,

    /// 95% Wilson interval, bounds rounded to 4 decimal places.
    pub confidence_interval: ConfidenceInterval,

    /// Unrounded proportion.
    #[serde(skip)]
    pub exact_proportion: f64,

    /// Unrounded interval bounds.
    #[serde(skip)]
    pub exact_interval: ConfidenceInterval,
}

impl GsReport {
    /// Assembles the report record from the raw counts and estimates.
    pub fn new(
        glomeruli_seen: u64,
        glomeruli_sclerosed: u64,
        proportion: f64,
        interval: ConfidenceInterval,
    ) -> Self {
        Self {
            glomeruli_seen,
            glomeruli_sclerosed,
            proportion: round4(proportion),
            confidence_interval: interval.rounded(),
            exact_proportion: proportion,
            exact_interval: interval,
        }
    }
}

impl fmt::Display for GsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     REPORT")?;
        writeln!(f, "################")?;
        writeln!(f)?;
        writeln!(f, "Glomeruli Seen: {}", self.glomeruli_seen)?;
        writeln!(f, "Glomeruli Sclerosed #: {}", self.glomeruli_sclerosed)?;
        writeln!(f, "Glomeruli Sclerosed %: {}", self.proportion)?;
        writeln!(f, "95% Confidence Interval: {}", self.confidence_interval)
    }
}

/// A single row in the glomerulosclerosis CSV report.
///
/// Column names match the reference report fields.
#[derive(Debug, Serialize)]
struct GsCsvRow {
    #[serde(rename = "Glomeruli Seen")]
    glomeruli_seen: u64,
    #[serde(rename = "Glomeruli Sclerosed #")]
    glomeruli_sclerosed: u64,
    #[serde(rename = "Glomeruli Sclerosed %")]
    proportion: f64,
    #[serde(rename = "95% Confidence Interval")]
    confidence_interval: String,
}

/// Writes the report as `glomerulosclerosis.csv` in `dir`.
///
/// Returns the path of the written file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_csv_report(dir: &Path, report: &GsReport) -> Result<PathBuf, GlomscoreError> {
    let path = dir.join("glomerulosclerosis.csv");
    let file = File::create(&path).map_err(GlomscoreError::Io)?;
    let writer = BufWriter::new(file);

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .serialize(GsCsvRow {
            glomeruli_seen: report.glomeruli_seen,
            glomeruli_sclerosed: report.glomeruli_sclerosed,
            proportion: report.proportion,
            confidence_interval: report.confidence_interval.to_string(),
        })
        .map_err(|source| GlomscoreError::CsvWrite {
            path: path.clone(),
            source,
        })?;
    csv_writer.flush()?;

    Ok(path)
}

/// Rounds a value to 4 decimal places (report display precision).
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

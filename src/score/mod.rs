//! Glomerulosclerosis score estimation.
//!
//! This module computes the GS lesion score (the proportion of globally
//! sclerosed glomeruli among all glomeruli seen) from two raw annotation
//! counts, together with a 95% Wilson score confidence interval, and
//! assembles the two into a reportable record.

mod report;

pub use report::{write_csv_report, ConfidenceInterval, GsReport};

use crate::error::GlomscoreError;

/// Two-sided critical value for a 95% confidence level.
///
/// The exact 97.5% normal quantile is 1.95996…; the literal 1.96 is kept
/// so outputs match the reference computation.
pub const Z_95: f64 = 1.96;

/// Computes the sample proportion `successes / total`.
///
/// The result is unrounded; rounding to display precision happens when the
/// report record is assembled.
///
/// # Errors
/// Returns [`GlomscoreError::ZeroTotal`] when `total` is zero, and
/// [`GlomscoreError::OutOfRange`] when `successes` exceeds `total`.
pub fn proportion(successes: u64, total: u64) -> Result<f64, GlomscoreError> {
    if total == 0 {
        return Err(GlomscoreError::ZeroTotal);
    }
    if successes > total {
        return Err(GlomscoreError::OutOfRange { successes, total });
    }

    Ok(successes as f64 / total as f64)
}

/// Computes the two-sided 95% Wilson score interval for a binomial
/// proportion.
///
/// Unlike the normal-approximation (Wald) interval, the Wilson interval
/// stays inside [0, 1] and keeps a non-zero width when the observed
/// proportion is exactly 0 or 1, the common case for the small or
/// one-sided samples that sparse annotation sets produce.
///
/// # Errors
/// Returns [`GlomscoreError::ZeroTotal`] when `total` is zero, and
/// [`GlomscoreError::OutOfRange`] when `successes` exceeds `total`.
pub fn wilson_interval(successes: u64, total: u64) -> Result<ConfidenceInterval, GlomscoreError> {
    wilson_interval_with_z(successes, total, Z_95)
}

/// Wilson score interval with an explicit critical value.
pub fn wilson_interval_with_z(
    successes: u64,
    total: u64,
    z: f64,
) -> Result<ConfidenceInterval, GlomscoreError> {
    if total == 0 {
        return Err(GlomscoreError::ZeroTotal);
    }
    if successes > total {
        return Err(GlomscoreError::OutOfRange { successes, total });
    }

    let n = total as f64;
    let p_hat = successes as f64 / n;
    let z2 = z * z;

    let denominator = 1.0 + z2 / n;
    let center = p_hat + z2 / (2.0 * n);
    let margin = z * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt();

    // Clamp floating-point residue at the boundaries back into [0, 1].
    Ok(ConfidenceInterval {
        lower: ((center - margin) / denominator).max(0.0),
        upper: ((center + margin) / denominator).min(1.0),
    })
}

/// Computes the glomerulosclerosis score from the two annotation counts.
///
/// `non_sclerosed` and `sclerosed` are the cardinalities of the two
/// annotation collections. The score is the proportion of sclerosed
/// glomeruli among all glomeruli seen, reported with its 95% Wilson
/// interval.
///
/// # Errors
/// Returns [`GlomscoreError::ZeroTotal`] when both counts are zero.
pub fn compute_gs(non_sclerosed: u64, sclerosed: u64) -> Result<GsReport, GlomscoreError> {
    let total = non_sclerosed + sclerosed;

    let p = proportion(sclerosed, total)?;
    let interval = wilson_interval(sclerosed, total)?;

    Ok(GsReport::new(total, sclerosed, p, interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn proportion_of_valid_counts() {
        assert_eq!(proportion(30, 100).unwrap(), 0.3);
        assert_eq!(proportion(0, 50).unwrap(), 0.0);
        assert_eq!(proportion(50, 50).unwrap(), 1.0);
    }

    #[test]
    fn proportion_rejects_zero_total() {
        assert!(matches!(
            proportion(0, 0),
            Err(GlomscoreError::ZeroTotal)
        ));
    }

    #[test]
    fn proportion_rejects_count_above_total() {
        assert!(matches!(
            proportion(12, 10),
            Err(GlomscoreError::OutOfRange {
                successes: 12,
                total: 10
            })
        ));
    }

    #[test]
    fn wilson_rejects_zero_total_with_reference_message() {
        let err = wilson_interval(5, 0).unwrap_err();
        assert_eq!(err.to_string(), "total must be greater than zero");
    }

    #[test]
    fn wilson_known_values() {
        let interval = wilson_interval(30, 100).unwrap();
        assert_approx(interval.lower, 0.2189475);
        assert_approx(interval.upper, 0.3958504);

        let interval = wilson_interval(3, 10).unwrap();
        assert_approx(interval.lower, 0.1077893);
        assert_approx(interval.upper, 0.6032268);
    }

    #[test]
    fn wilson_lower_bound_is_zero_without_successes() {
        let interval = wilson_interval(0, 50).unwrap();
        assert!(interval.lower.abs() < 1e-12);
        assert_approx(interval.upper, 0.0713500);
    }

    #[test]
    fn wilson_upper_bound_is_one_with_all_successes() {
        let interval = wilson_interval(50, 50).unwrap();
        assert_approx(interval.lower, 0.9286500);
        assert!((1.0 - interval.upper).abs() < 1e-12);
    }

    #[test]
    fn wilson_is_symmetric_about_one_half() {
        let forward = wilson_interval(30, 100).unwrap();
        let mirrored = wilson_interval(70, 100).unwrap();

        assert_approx(forward.lower, 1.0 - mirrored.upper);
        assert_approx(forward.upper, 1.0 - mirrored.lower);
    }

    #[test]
    fn wilson_with_wider_confidence_gives_wider_interval() {
        let narrow = wilson_interval_with_z(30, 100, Z_95).unwrap();
        let wide = wilson_interval_with_z(30, 100, 2.576).unwrap();

        assert!(wide.lower < narrow.lower);
        assert!(narrow.upper < wide.upper);
    }

    #[test]
    fn compute_gs_assembles_the_report() {
        let report = compute_gs(70, 30).unwrap();

        assert_eq!(report.glomeruli_seen, 100);
        assert_eq!(report.glomeruli_sclerosed, 30);
        assert_eq!(report.proportion, 0.3);
        assert_eq!(report.confidence_interval.lower, 0.2189);
        assert_eq!(report.confidence_interval.upper, 0.3959);
        assert_approx(report.exact_proportion, 0.3);
        assert_approx(report.exact_interval.lower, 0.2189475);
        assert_approx(report.exact_interval.upper, 0.3958504);
    }

    #[test]
    fn compute_gs_rejects_empty_collections() {
        assert!(matches!(
            compute_gs(0, 0),
            Err(GlomscoreError::ZeroTotal)
        ));
    }
}

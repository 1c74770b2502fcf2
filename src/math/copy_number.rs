//! Poisson copy-number estimation for droplet counts.
//!
//! With a fraction `p` of positive droplets the mean occupancy is
//! `lambda = -ln(1 - p)` copies per droplet.

use crate::error::AnalysisError;
use crate::math::stats::AnalysisResult;

const LITERS_TO_MICROLITERS: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopyNumberEstimate {
    pub lambda: f64,
    pub copies_per_ul: f64,
}

pub fn estimate(
    positive: u64,
    total: u64,
    volume_per_droplet: f64,
) -> Result<CopyNumberEstimate, AnalysisError> {
    if total == 0 {
        return Err(AnalysisError::domain("total droplet count is zero"));
    }
    if positive > total {
        return Err(AnalysisError::domain(format!(
            "positive droplets ({}) exceed total ({})",
            positive, total
        )));
    }
    if positive == total {
        return Err(AnalysisError::domain(format!(
            "all {} droplets positive; occupancy is unbounded",
            total
        )));
    }
    if !volume_per_droplet.is_finite() || volume_per_droplet <= 0.0 {
        return Err(AnalysisError::domain(format!(
            "droplet volume must be finite and positive, got {}",
            volume_per_droplet
        )));
    }

    let p = positive as f64 / total as f64;
    let lambda = -(-p).ln_1p();
    Ok(CopyNumberEstimate {
        lambda,
        copies_per_ul: lambda / (volume_per_droplet * LITERS_TO_MICROLITERS),
    })
}

/// Copies per microliter; `volume_per_droplet` is in liters.
pub fn estimate_copy_number(
    positive: u64,
    total: u64,
    volume_per_droplet: f64,
) -> Result<f64, AnalysisError> {
    estimate(positive, total, volume_per_droplet).map(|e| e.copies_per_ul)
}

pub fn estimate_from_result(
    result: &AnalysisResult,
    volume_per_droplet: f64,
) -> Result<CopyNumberEstimate, AnalysisError> {
    estimate(
        result.count_above_threshold as u64,
        result.total_values as u64,
        volume_per_droplet,
    )
}

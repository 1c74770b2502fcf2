//! Plate-level aggregate statistics.

use crate::error::AnalysisError;
use crate::math::outliers::detect_outliers;
use crate::plate::Plate;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub average: f64,
    pub count_above_threshold: usize,
    pub outliers: Vec<f64>,
    pub total_values: usize,
}

impl AnalysisResult {
    pub fn positive_fraction(&self) -> f64 {
        self.count_above_threshold as f64 / self.total_values as f64
    }
}

/// Single pass over the plate: count, sum and readings strictly above
/// `threshold`. Outliers are taken over the flattened readings.
pub fn aggregate(plate: &Plate, threshold: f64) -> Result<AnalysisResult, AnalysisError> {
    let mut all_values = Vec::with_capacity(plate.total_values());
    let mut sum = 0.0;
    let mut count_above_threshold = 0;

    for value in plate.flattened() {
        sum += value;
        if value > threshold {
            count_above_threshold += 1;
        }
        all_values.push(value);
    }

    let total_values = all_values.len();
    if total_values == 0 {
        return Err(AnalysisError::EmptyDataset);
    }

    Ok(AnalysisResult {
        average: sum / total_values as f64,
        count_above_threshold,
        outliers: detect_outliers(&all_values),
        total_values,
    })
}

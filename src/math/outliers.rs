//! IQR outlier detection with nearest-rank quartiles.
//!
//! Q1 is `sorted[floor(n * 0.25)]` and Q3 is `sorted[ceil(n * 0.75)]`, with the
//! Q3 index clamped to `n - 1`. This is not an interpolating quantile; the
//! indexing is kept for compatibility with existing plate reports.

const IQR_FENCE: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl QuartileBounds {
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }
}

pub fn q1_index(n: usize) -> usize {
    n / 4
}

/// `ceil(3n / 4)` clamped into the slice.
pub fn q3_index(n: usize) -> usize {
    (3 * n).div_ceil(4).min(n.saturating_sub(1))
}

pub fn quartile_bounds(data: &[f64]) -> Option<QuartileBounds> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let q1 = sorted[q1_index(n)];
    let q3 = sorted[q3_index(n)];
    let iqr = q3 - q1;
    Some(QuartileBounds {
        q1,
        q3,
        iqr,
        lower: q1 - IQR_FENCE * iqr,
        upper: q3 + IQR_FENCE * iqr,
    })
}

/// Values strictly outside the IQR fences, in input order.
pub fn detect_outliers(data: &[f64]) -> Vec<f64> {
    match quartile_bounds(data) {
        Some(bounds) => data
            .iter()
            .copied()
            .filter(|&x| !bounds.contains(x))
            .collect(),
        None => Vec::new(),
    }
}

pub mod copy_number;
pub mod outliers;
pub mod stats;

pub use copy_number::{CopyNumberEstimate, estimate_copy_number, estimate_from_result};
pub use outliers::{QuartileBounds, detect_outliers, quartile_bounds};
pub use stats::{AnalysisResult, aggregate};

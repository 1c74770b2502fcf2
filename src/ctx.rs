use crate::math::{AnalysisResult, CopyNumberEstimate, QuartileBounds};
use crate::plate::Plate;
use crate::schema::v1::DpcrQcV1;

#[derive(Debug)]
pub struct Ctx {
    pub plate: Plate,
    pub threshold: f64,
    pub droplet_volume: f64,
    pub report_outliers: bool,
    pub write_json: bool,
    pub warnings: Vec<String>,
    pub analysis: Option<AnalysisResult>,
    pub bounds: Option<QuartileBounds>,
    pub copy_number: Option<CopyNumberEstimate>,
    pub report: DpcrQcV1,
}

impl Ctx {
    pub fn new(
        plate: Plate,
        threshold: f64,
        droplet_volume: f64,
        report_outliers: bool,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        let report = DpcrQcV1::empty(tool_version, threshold, droplet_volume);
        Self {
            plate,
            threshold,
            droplet_volume,
            report_outliers,
            write_json,
            warnings: Vec::new(),
            analysis: None,
            bounds: None,
            copy_number: None,
            report,
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub wells: u64,
    pub readings: u64,
    pub threshold: f64,
    pub droplet_volume_l: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub average: f64,
    pub count_above_threshold: u64,
    pub total_values: u64,
    pub positive_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outliers {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyNumber {
    pub lambda: f64,
    pub copies_per_droplet: f64,
    pub copies_per_ul: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DpcrQcV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub stats: Option<Stats>,
    pub outliers: Option<Outliers>,
    pub copy_number: Option<CopyNumber>,
    pub warnings: Vec<String>,
}

impl DpcrQcV1 {
    pub fn empty(tool_version: &str, threshold: f64, droplet_volume_l: f64) -> Self {
        Self {
            tool: "kira-dpcrqc".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                wells: 0,
                readings: 0,
                threshold,
                droplet_volume_l,
            },
            stats: None,
            outliers: None,
            copy_number: None,
            warnings: Vec::new(),
        }
    }
}

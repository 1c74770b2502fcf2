use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{CopyNumber, DpcrQcV1, InputMeta, Outliers, Stats};

pub fn build_report(ctx: &Ctx) -> Result<DpcrQcV1> {
    let analysis = ctx.analysis.as_ref().context("analysis result missing")?;
    let estimate = ctx.copy_number.as_ref().context("copy number missing")?;

    let input_meta = InputMeta {
        wells: ctx.plate.wells().len() as u64,
        readings: ctx.plate.total_values() as u64,
        threshold: ctx.threshold,
        droplet_volume_l: ctx.droplet_volume,
    };

    let stats = Stats {
        average: analysis.average,
        count_above_threshold: analysis.count_above_threshold as u64,
        total_values: analysis.total_values as u64,
        positive_fraction: analysis.positive_fraction(),
    };

    let outliers = if ctx.report_outliers {
        let bounds = ctx.bounds.as_ref().context("quartile bounds missing")?;
        Some(Outliers {
            q1: bounds.q1,
            q3: bounds.q3,
            iqr: bounds.iqr,
            lower_bound: bounds.lower,
            upper_bound: bounds.upper,
            values: analysis.outliers.clone(),
        })
    } else {
        None
    };

    let copy_number = CopyNumber {
        lambda: estimate.lambda,
        copies_per_droplet: estimate.lambda,
        copies_per_ul: estimate.copies_per_ul,
    };

    Ok(DpcrQcV1 {
        tool: "kira-dpcrqc".to_string(),
        version: ctx.report.version.clone(),
        schema_version: "v1".to_string(),
        input_meta,
        stats: Some(stats),
        outliers,
        copy_number: Some(copy_number),
        warnings: ctx.warnings.clone(),
    })
}

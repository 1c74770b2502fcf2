use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let analysis = ctx.analysis.as_ref().context("analysis result missing")?;
    let estimate = ctx.copy_number.as_ref().context("copy number missing")?;

    let mut out = String::new();
    out.push_str(&format!("kira-dpcrqc v{}\n", ctx.report.version));
    out.push_str(&format!(
        "Plate: {} wells, {} readings, threshold={}\n",
        ctx.plate.wells().len(),
        analysis.total_values,
        ctx.threshold
    ));
    out.push_str(&format!("Average: {:.4}\n", analysis.average));
    out.push_str(&format!(
        "Above threshold: {}/{}\n",
        analysis.count_above_threshold, analysis.total_values
    ));

    if ctx.report_outliers {
        if analysis.outliers.is_empty() {
            out.push_str("Outliers: none\n");
        } else {
            let values: Vec<String> = analysis.outliers.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!("Outliers: {}\n", values.join(", ")));
        }
    }

    out.push_str(&format!("Copies/uL: {:.2}\n", estimate.copies_per_ul));

    if !ctx.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &ctx.warnings {
            out.push_str(&format!("- {}\n", warning));
        }
    }

    Ok(out)
}

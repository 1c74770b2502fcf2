use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::math::{aggregate, quartile_bounds};
use crate::pipeline::Stage;

pub struct Stage1Aggregate;

impl Stage1Aggregate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Aggregate {
    fn name(&self) -> &'static str {
        "stage1_aggregate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let result = aggregate(&ctx.plate, ctx.threshold).context("plate aggregation failed")?;
        let flat: Vec<f64> = ctx.plate.flattened().collect();
        ctx.bounds = quartile_bounds(&flat);

        info!(
            total_values = result.total_values,
            average = result.average,
            count_above_threshold = result.count_above_threshold,
            outliers = result.outliers.len(),
            "aggregate_ready"
        );
        ctx.analysis = Some(result);
        Ok(())
    }
}

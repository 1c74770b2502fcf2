use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Plate;

impl Stage0Plate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Plate {
    fn name(&self) -> &'static str {
        "stage0_plate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.threshold.is_finite() {
            bail!("threshold must be finite, got {}", ctx.threshold);
        }

        for well in ctx.plate.wells() {
            if well.is_empty() {
                ctx.warnings.push(format!("well '{}' has no readings", well.name()));
            }
        }

        ctx.report.input_meta.wells = ctx.plate.wells().len() as u64;
        ctx.report.input_meta.readings = ctx.plate.total_values() as u64;

        info!(
            wells = ctx.plate.wells().len(),
            readings = ctx.plate.total_values(),
            threshold = ctx.threshold,
            "plate_validated"
        );
        Ok(())
    }
}

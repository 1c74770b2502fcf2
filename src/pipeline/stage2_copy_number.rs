use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::math::estimate_from_result;
use crate::pipeline::Stage;

pub struct Stage2CopyNumber;

impl Stage2CopyNumber {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2CopyNumber {
    fn name(&self) -> &'static str {
        "stage2_copy_number"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let analysis = ctx
            .analysis
            .as_ref()
            .context("analysis result missing before copy number")?;
        let estimate = estimate_from_result(analysis, ctx.droplet_volume)
            .context("copy number estimation failed")?;

        info!(
            lambda = estimate.lambda,
            copies_per_ul = estimate.copies_per_ul,
            "copy_number_ready"
        );
        ctx.copy_number = Some(estimate);
        Ok(())
    }
}

use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::json_writer;
use crate::pipeline::Stage;

pub struct Stage3Report;

impl Stage3Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Report {
    fn name(&self) -> &'static str {
        "stage3_report"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.report = json_writer::build_report(ctx)?;
        info!("report_ready");
        Ok(())
    }
}

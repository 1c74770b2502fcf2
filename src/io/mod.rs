use std::io::Write;

use anyhow::Result;

use crate::schema::v1::DpcrQcV1;

pub mod json_writer;
pub mod summary;

pub fn write_json<W: Write>(mut writer: W, report: &DpcrQcV1) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

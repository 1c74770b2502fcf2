//! Plate and well definitions.
//!
//! A plate is fixed once built; readings are validated on construction so the
//! math layer only ever sees finite, non-negative intensities.

use anyhow::{Context, Result, bail};

use crate::error::AnalysisError;

pub const DEFAULT_THRESHOLD: f64 = 20.0;
/// 2 picoliters, in liters.
pub const DEFAULT_DROPLET_VOLUME: f64 = 2e-15;

#[derive(Debug, Clone, PartialEq)]
pub struct Well {
    name: String,
    values: Vec<f64>,
}

impl Well {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    wells: Vec<Well>,
}

impl Plate {
    pub fn new(wells: Vec<Well>) -> Result<Self, AnalysisError> {
        for well in &wells {
            if let Some((index, &value)) = well
                .values
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || **v < 0.0)
            {
                return Err(AnalysisError::InvalidReading {
                    well: well.name.clone(),
                    index,
                    value,
                });
            }
        }
        Ok(Self { wells })
    }

    /// Three rows of five droplets, the reference dataset used by the demo run.
    pub fn demo() -> Self {
        Self {
            wells: vec![
                Well::new("Row 1", vec![0.0, 15.0, 12.0, 12.0, 15.0]),
                Well::new("Row 2", vec![34.0, 30.0, 0.0, 34.0, 18.0]),
                Well::new("Row 3", vec![0.0, 9.0, 56.0, 5.0, 6.0]),
            ],
        }
    }

    pub fn wells(&self) -> &[Well] {
        &self.wells
    }

    pub fn total_values(&self) -> usize {
        self.wells.iter().map(Well::len).sum()
    }

    /// All readings in well order, then within-well order.
    pub fn flattened(&self) -> impl Iterator<Item = f64> + '_ {
        self.wells.iter().flat_map(|w| w.values.iter().copied())
    }
}

/// Parses `NAME=v1,v2,...`. `NAME=` yields an empty well.
pub fn parse_well_spec(spec: &str) -> Result<Well> {
    let (name, values) = spec
        .split_once('=')
        .with_context(|| format!("well spec '{}' missing '=' (expected NAME=v1,v2,...)", spec))?;
    let name = name.trim();
    if name.is_empty() {
        bail!("well spec '{}' has an empty name", spec);
    }

    let values = values.trim();
    let mut parsed = Vec::new();
    if !values.is_empty() {
        for (idx, raw) in values.split(',').enumerate() {
            let raw = raw.trim();
            let value: f64 = raw.parse().with_context(|| {
                format!("well spec '{}' value {} ('{}') is not a number", spec, idx, raw)
            })?;
            parsed.push(value);
        }
    }
    Ok(Well::new(name, parsed))
}

/// Builds a plate from CLI well specs, or the demo plate when none are given.
pub fn plate_from_specs(specs: &[String]) -> Result<Plate> {
    if specs.is_empty() {
        return Ok(Plate::demo());
    }
    let wells = specs
        .iter()
        .map(|s| parse_well_spec(s))
        .collect::<Result<Vec<_>>>()?;
    Ok(Plate::new(wells)?)
}

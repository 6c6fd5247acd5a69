use std::io::{self, Write};

use thiserror::Error;

use crate::services::aggregation::CalculationResult;

#[derive(Error, Debug)]
pub enum ReportYamlError {
    #[error("failed to read report file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse report yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn serialize_report_to_yaml<W: Write>(
    writer: &mut W,
    report: &CalculationResult,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(report).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

/// Loads a previously written calculation report, e.g. as input to a
/// preview-removal edit.
pub fn load_report_from_yaml_file(path: &str) -> Result<CalculationResult, ReportYamlError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

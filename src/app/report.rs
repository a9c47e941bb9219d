//! Conversion tables: one value expressed in every unit of its category

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct ConversionTable<'a> {
    pub category: Category,
    pub source: &'a Measurement,
    pub results: &'a [Measurement],
}

#[derive(Serialize)]
struct CsvRow<'a> {
    unit: &'a str,
    value: f64,
}

impl ConversionTable<'_> {
    pub fn write(&self, out: &mut impl Write, format: ReportFormat) -> Result<(), ReportError> {
        match format {
            ReportFormat::Text => self.write_text(out),
            ReportFormat::Csv => self.write_csv(out),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    fn write_text(&self, out: &mut impl Write) -> Result<(), ReportError> {
        let width = self.results.iter().map(|m| m.unit.len()).max().unwrap_or(0);

        writeln!(
            out,
            "{} {} ({}):",
            DisplayValue(self.source.value),
            self.source.unit,
            self.category
        )?;
        for m in self.results {
            writeln!(out, "  {:<width$}  {}", m.unit, DisplayValue(m.value))?;
        }
        Ok(())
    }

    fn write_csv(&self, out: &mut impl Write) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_writer(out);
        for m in self.results {
            writer.serialize(CsvRow {
                unit: &m.unit,
                value: m.value,
            })?;
        }
        writer.flush()?;
        Ok(())
    }
}

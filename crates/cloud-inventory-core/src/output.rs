//! Output rendering for instance records

use crate::error::{InventoryError, Result};
use crate::record::InstanceRecord;
use comfy_table::{Table, presets};
use std::fmt;
use std::str::FromStr;

const HEADERS: [&str; 4] = ["ID", "Name", "Type", "State"];

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Table,
        OutputFormat::Json,
        OutputFormat::Csv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(InventoryError::Format(format!(
                "Unsupported output format '{}'. Supported formats: table, json, csv",
                s
            ))),
        }
    }
}

/// Render records in the given format. The result has no trailing newline.
pub fn render(records: &[InstanceRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(records)),
        OutputFormat::Json => render_json(records),
        OutputFormat::Csv => Ok(render_csv(records)),
    }
}

/// Pretty-printed JSON array with 2-space indentation
pub fn render_json(records: &[InstanceRecord]) -> Result<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| InventoryError::Generic(format!("failed to serialize instances: {}", e)))
}

/// Header line plus one line per record.
///
/// Fields are joined with `,` as is: values containing commas, quotes or
/// newlines are not escaped.
pub fn render_csv(records: &[InstanceRecord]) -> String {
    std::iter::once(HEADERS.join(","))
        .chain(records.iter().map(|r| {
            [
                r.id.as_str(),
                r.name.as_str(),
                r.instance_type.as_str(),
                r.state.as_str(),
            ]
            .join(",")
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_table(records: &[InstanceRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);
    table.set_header(HEADERS);

    for r in records {
        table.add_row(vec![
            r.id.as_str(),
            r.name.as_str(),
            r.instance_type.as_str(),
            r.state.as_str(),
        ]);
    }

    table.to_string()
}

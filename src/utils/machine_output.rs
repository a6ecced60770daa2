//! Versioned JSON/YAML envelopes for `--format`

use crate::error::Result;
use chrono::Utc;
use serde::Serialize;

pub const ENVELOPE_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable output
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn is_machine(self) -> bool {
        !matches!(self, Self::Text)
    }
}

#[derive(Debug, Serialize)]
pub struct MachineEnvelope<T>
where
    T: Serialize,
{
    pub version: String,
    pub command: String,
    pub ok: bool,
    pub data: T,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub meta: MachineMeta,
}

#[derive(Debug, Serialize)]
pub struct MachineMeta {
    pub generated_at: String,
}

impl<T: Serialize> MachineEnvelope<T> {
    pub fn new(command: &str, data: T, warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            command: command.to_string(),
            ok: errors.is_empty(),
            data,
            warnings,
            errors,
            meta: MachineMeta {
                generated_at: Utc::now().to_rfc3339(),
            },
        }
    }

    /// Serialize the envelope; `Text` renders nothing
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Yaml => serde_yml::to_string(self)?,
            OutputFormat::Text => String::new(),
        })
    }
}

pub fn emit_v1<T>(
    command: &str,
    data: T,
    warnings: Vec<String>,
    errors: Vec<String>,
    format: OutputFormat,
) -> Result<()>
where
    T: Serialize,
{
    let out = MachineEnvelope::new(command, data, warnings, errors).render(format)?;
    if !out.is_empty() {
        println!("{}", out.trim_end());
    }
    Ok(())
}

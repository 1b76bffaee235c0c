//! CLI command for data export

use crate::error::{KakeiboError, KakeiboResult};
use crate::export::{json, yaml};
use crate::storage::Storage;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Write the full export to `output`
pub fn handle_export_command(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> KakeiboResult<()> {
    let file = File::create(&output).map_err(|e| {
        KakeiboError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => json::export_full_json(storage, &mut writer, pretty)?,
        ExportFormat::Yaml => yaml::export_full_yaml(storage, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| KakeiboError::Export(e.to_string()))?;

    println!(
        "Exported {} transactions and {} goals to: {}",
        storage.transactions.count()?,
        storage.goals.count()?,
        output.display()
    );

    Ok(())
}

//! YAML Export functionality
//!
//! Human-readable variant of the full JSON export.

use crate::error::{KakeiboError, KakeiboResult};
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export everything to YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> KakeiboResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# Kakeibo Data Export").map_err(|e| KakeiboError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| KakeiboError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KakeiboPaths;
    use crate::services::{GoalForm, GoalService};
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        GoalService::new(&storage)
            .add(&GoalForm::new("Bike", "800", "2024-09-01", "150"))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Kakeibo Data Export"));
        assert!(text.contains("name: Bike"));

        let parsed: FullExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.goals.len(), 1);
        assert_eq!(parsed.summary.savings.cents(), 15_000);
    }
}

// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::TableRow;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (absent cells become `null`).
pub(crate) fn export_json<R: TableRow>(rows: &[R], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)
        .map_err(|e| AppError::Export(format!("cannot create {}: {e}", path.display())))?;
    file.write_all(json_data.as_bytes())
        .map_err(|e| AppError::Export(format!("JSON write error: {e}")))?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV. The header is written explicitly so that an empty
/// report still carries its column set.
pub(crate) fn export_csv<R: TableRow>(rows: &[R], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(R::headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

use crate::errors::{AppError, AppResult};
use crate::export::model::DailyRowExport;
use std::fs::File;

/// Write the daily rows as pretty JSON to the given path.
pub fn write_json(path: &str, rows: &[DailyRowExport]) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, rows).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}

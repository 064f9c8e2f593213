use crate::errors::AppResult;
use crate::export::model::{DailyRowExport, get_headers, row_to_record};
use csv::Writer;

/// Write the daily rows as CSV to the given path.
pub fn write_csv(path: &str, rows: &[DailyRowExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.write_record(row_to_record(row))?;
    }

    wtr.flush()?;
    Ok(())
}

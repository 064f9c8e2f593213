use crate::core::aggregate::aggregate_daily;
use crate::core::zone::ZoneClock;
use crate::errors::AppResult;
use crate::export::model::DailyRowExport;
use crate::export::{ExportFormat, csv, fs_utils, json, notify_export_success};
use crate::models::clock_event::ClockEvent;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Aggregate the events and write the daily rows in the requested
    /// format. Rows keep the aggregator's ordering (day desc, user asc).
    pub fn write(
        events: &[ClockEvent],
        clock: &ZoneClock,
        format: &ExportFormat,
        path: &str,
        force: bool,
    ) -> AppResult<usize> {
        fs_utils::check_overwrite(path, force)?;

        let rows: Vec<DailyRowExport> = aggregate_daily(events, clock)
            .iter()
            .map(DailyRowExport::from_aggregate)
            .collect();

        match format {
            ExportFormat::Csv => csv::write_csv(path, &rows)?,
            ExportFormat::Json => json::write_json(path, &rows)?,
        }

        notify_export_success(format.as_str(), Path::new(path));
        Ok(rows.len())
    }
}

//! Roster export.
//!
//! CSV output keeps the spreadsheet layout of one row per schedule:
//! `Schedule` (1-based number) and `Trips` (the formatted chain). JSON
//! output is the list of [`ScheduleRecord`]s.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::error::{Result, ScheduleError};
use crate::format::{format_schedule, to_records, ScheduleRecord};
use crate::models::{Schedule, Trip};

/// Writes schedules as `Schedule,Trips` CSV rows.
pub fn write_schedules_csv(writer: impl Write, schedules: &[Schedule]) -> Result<()> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record(["Schedule", "Trips"])?;
    for (idx, schedule) in schedules.iter().enumerate() {
        csv.write_record([(idx + 1).to_string(), format_schedule(schedule)])?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes schedules as a pretty-printed JSON array of records.
pub fn write_schedules_json(mut writer: impl Write, schedules: &[Schedule]) -> Result<()> {
    let records: Vec<ScheduleRecord> = to_records(schedules);
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    Ok(())
}

/// Exports schedules to `path`, choosing the format from its extension.
pub fn export_schedules(path: impl AsRef<Path>, schedules: &[Schedule]) -> Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => write_schedules_csv(BufWriter::new(File::create(path)?), schedules)?,
        "json" => write_schedules_json(BufWriter::new(File::create(path)?), schedules)?,
        _ => return Err(ScheduleError::UnsupportedFormat(ext)),
    }

    info!(path = %path.display(), schedules = schedules.len(), "schedules exported");
    Ok(())
}

/// Writes trips in the loader's CSV format.
pub fn write_trips_csv(writer: impl Write, trips: &[Trip]) -> Result<()> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record([
        super::loader::ORIGIN,
        super::loader::DESTINATION,
        super::loader::DEPARTURE_TIME,
        super::loader::ARRIVAL_TIME,
    ])?;
    for trip in trips {
        csv.write_record([
            trip.origin.clone(),
            trip.destination.clone(),
            trip.departure.format("%H:%M").to_string(),
            trip.arrival.format("%H:%M").to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OvernightPolicy;
    use crate::io::read_trips;
    use crate::models::hm;
    use crate::scheduler::compute_schedules;

    fn sample() -> Vec<Schedule> {
        compute_schedules(&[
            Trip::new("A", "B", hm(8, 0), hm(9, 0)),
            Trip::new("B", "A", hm(9, 5), hm(10, 0)),
            Trip::new("C", "D", hm(9, 30), hm(10, 0)),
        ])
    }

    #[test]
    fn test_csv_layout() {
        let mut buf = Vec::new();
        write_schedules_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Schedule,Trips");
        assert_eq!(lines[1], "1,A 08:00 → B; B 09:05 → A");
        assert_eq!(lines[2], "2,C 09:30 → D");
    }

    #[test]
    fn test_json_records() {
        let mut buf = Vec::new();
        write_schedules_json(&mut buf, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["schedule_index"], 1);
        assert_eq!(value[0]["trips"][1]["origin"], "B");
        assert_eq!(value[0]["trips"][1]["departure_time"], "09:05");
        assert_eq!(value[1]["trips"][0]["destination"], "D");
    }

    #[test]
    fn test_export_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("roster.csv");
        let json_path = dir.path().join("roster.JSON");

        export_schedules(&csv_path, &sample()).unwrap();
        export_schedules(&json_path, &sample()).unwrap();
        assert!(std::fs::read_to_string(&csv_path).unwrap().starts_with("Schedule,Trips"));
        assert!(std::fs::read_to_string(&json_path).unwrap().starts_with('['));

        let err = export_schedules(dir.path().join("roster.xlsx"), &sample()).unwrap_err();
        assert!(matches!(err, ScheduleError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn test_trip_csv_readable_by_loader() {
        let trips = vec![
            Trip::new("A", "B", hm(8, 0), hm(9, 0)),
            Trip::new("B", "A", hm(23, 50), hm(0, 20)),
        ];
        let mut buf = Vec::new();
        write_trips_csv(&mut buf, &trips).unwrap();
        let loaded = read_trips(buf.as_slice(), OvernightPolicy::RollOver).unwrap();
        assert_eq!(loaded, trips);
    }
}

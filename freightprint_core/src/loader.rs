//! Logistics record ingestion.
//!
//! Reads the delimited input resource into [`LogisticsEntry`] rows. Faults
//! never abort the pipeline at this stage: a missing file yields an empty
//! batch and a mid-file fault yields the rows parsed before it.

use crate::events::EventSink;
use crate::{Error, LogisticsEntry, Result};
use std::path::Path;

/// Recognized columns; anything else in the header is ignored
const MODE_COLUMN: &str = "transport_mode";
const DISTANCE_COLUMN: &str = "distance";
const WEIGHT_COLUMN: &str = "weight";

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    Ok(reader)
}

fn field<'r>(record: &'r csv::StringRecord, idx: Option<usize>) -> Option<&'r str> {
    idx.and_then(|i| record.get(i))
}

/// Load logistics entries from a delimited file with a header row
///
/// Row order is preserved. A column absent from the header falls back to
/// its default (`""` for the mode, `"0"` for distance and weight); a
/// present-but-empty cell is kept verbatim so the aggregation stage sees
/// it. All faults are recorded to the sink and swallowed: not-found
/// yields an empty batch, any other read or parse fault yields whatever
/// rows were parsed before it.
pub fn load_entries(path: &Path, sink: &dyn EventSink) -> Vec<LogisticsEntry> {
    let mut reader = match open_reader(path) {
        Ok(reader) => reader,
        Err(Error::NotFound(path)) => {
            sink.error(&format!("File not found: {}", path.display()));
            return Vec::new();
        }
        Err(e) => {
            sink.error(&format!("Error reading logistics data: {}", e));
            return Vec::new();
        }
    };

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            sink.error(&format!("Error reading logistics data: {}", e));
            return Vec::new();
        }
    };
    let mode_idx = headers.iter().position(|h| h == MODE_COLUMN);
    let distance_idx = headers.iter().position(|h| h == DISTANCE_COLUMN);
    let weight_idx = headers.iter().position(|h| h == WEIGHT_COLUMN);

    let mut entries = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => entries.push(LogisticsEntry {
                transport_mode: field(&record, mode_idx).unwrap_or("").to_string(),
                distance: field(&record, distance_idx).unwrap_or("0").to_string(),
                weight: field(&record, weight_idx).unwrap_or("0").to_string(),
            }),
            Err(e) => {
                // Header is row 1, so the first data row is row 2
                let err = Error::Parse(format!("row {}: {}", idx + 2, e));
                sink.error(&format!("Error reading logistics data: {}", err));
                return entries;
            }
        }
    }

    sink.info("Logistics data read successfully.");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Level, MemorySink};
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join("logistics_data.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_rows_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &temp_dir,
            b"transport_mode,distance,weight\ntruck,100,2\nship,5000,30\n",
        );

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].transport_mode, "truck");
        assert_eq!(entries[0].distance, "100");
        assert_eq!(entries[0].weight, "2");
        assert_eq!(entries[1].transport_mode, "ship");
        assert!(sink.contains(Level::Info, "read successfully"));
    }

    #[test]
    fn test_missing_file_yields_empty_batch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert!(entries.is_empty());
        assert!(sink.contains(Level::Error, "File not found"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &temp_dir,
            b"order_id,transport_mode,distance,weight,carrier\n42,train,50,1,acme\n",
        );

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].transport_mode, "train");
        assert_eq!(entries[0].distance, "50");
        assert_eq!(entries[0].weight, "1");
    }

    #[test]
    fn test_absent_columns_get_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(&temp_dir, b"transport_mode,distance\ntruck,100\n");

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weight, "0");
    }

    #[test]
    fn test_empty_cell_stays_empty() {
        // An empty cell is kept verbatim so the aggregation stage sees it
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(&temp_dir, b"transport_mode,distance,weight\ntruck,,2\n");

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].distance, "");
    }

    #[test]
    fn test_missing_mode_defaults_to_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(&temp_dir, b"distance,weight\n100,2\n");

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].transport_mode, "");
    }

    #[test]
    fn test_short_row_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(&temp_dir, b"transport_mode,distance,weight\ntruck,100\n");

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].distance, "100");
        assert_eq!(entries[0].weight, "0");
    }

    #[test]
    fn test_mid_file_fault_returns_partial_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut contents = b"transport_mode,distance,weight\ntruck,100,2\n".to_vec();
        contents.extend_from_slice(&[0xff, 0xfe]); // invalid UTF-8 in row 2
        contents.extend_from_slice(b",5,1\n");
        let path = write_csv(&temp_dir, &contents);

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].transport_mode, "truck");
        assert!(sink.contains(Level::Error, "Error reading logistics data"));
    }

    #[test]
    fn test_header_only_file_yields_empty_batch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_csv(&temp_dir, b"transport_mode,distance,weight\n");

        let sink = MemorySink::new();
        let entries = load_entries(&path, &sink);

        assert!(entries.is_empty());
        assert!(sink.contains(Level::Info, "read successfully"));
    }
}

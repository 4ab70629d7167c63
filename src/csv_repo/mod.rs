// CSV load-log reader. Fixed column layout (`Time Stamp`, `PV Generation`,
// `Facility Load`, `Storage Generation`) behind a one-line header; timestamps
// like `1/1/17 0:00` are read as UTC. Rows whose timestamp or values do not
// parse are skipped; structural csv and I/O problems fail the load.

use std::path::Path;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::debug;

use crate::models::{ResampleResult, Sample, Window};
use crate::series::resample::decimation_step;

const TS_FORMAT: &str = "%m/%d/%y %H:%M";

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("read load log")]
    Io(#[from] std::io::Error),
    #[error("malformed load log")]
    Parse(#[from] csv::Error),
}

fn parse_record(record: &csv::StringRecord) -> Option<Sample> {
    let ts = NaiveDateTime::parse_from_str(record.get(0)?.trim(), TS_FORMAT).ok()?;
    Some(Sample {
        ts: ts.and_utc().timestamp_millis(),
        pv_load: record.get(1)?.trim().parse().ok()?,
        facility_load: record.get(2)?.trim().parse().ok()?,
        storage_gen: record.get(3)?.trim().parse().ok()?,
    })
}

/// Reads the whole file into a series: every row, no window, no decimation.
/// This is the import path.
pub fn read_series(path: &Path) -> Result<Vec<Sample>, CsvError> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        match parse_record(&record?) {
            Some(sample) => out.push(sample),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, path = %path.display(), "skipped unparseable load log rows");
    }
    Ok(out)
}

/// One streaming pass: parse, window-filter, and decimate per record, keeping
/// at most `max` samples. Only the first two accepted timestamps are held, to
/// fix the native resolution once; after the point budget is spent the rest
/// of the file is ignored, not buffered. The result is identical to
/// read_series + filter_window + downsample over the same file.
pub fn stream_series(
    path: &Path,
    window: Window,
    target_res: Option<i64>,
    max: usize,
) -> Result<ResampleResult, CsvError> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut points: Vec<Sample> = Vec::new();
    let mut first_ts = 0i64;
    let mut native_res: Option<i64> = None;
    let mut step = 1i64;
    let mut accepted = 0i64;
    let mut skipped = 0usize;

    for record in reader.records() {
        // Early stop once the budget is spent and the resolution is fixed.
        if points.len() >= max && native_res.is_some() {
            break;
        }
        let Some(sample) = parse_record(&record?) else {
            skipped += 1;
            continue;
        };
        if !window.contains(sample.ts) {
            continue;
        }

        if accepted == 0 {
            first_ts = sample.ts;
        } else if accepted == 1 {
            let res = sample.ts - first_ts;
            native_res = Some(res);
            step = decimation_step(res, target_res);
        }

        if accepted % step == 0 && points.len() < max {
            points.push(sample);
        }
        accepted += 1;
    }
    if skipped > 0 {
        debug!(skipped, path = %path.display(), "skipped unparseable load log rows");
    }

    Ok(ResampleResult {
        points,
        original_res: native_res,
        actual_res: native_res.map(|res| res * step),
    })
}

// Orchestration: windowed series -> resampled points + per-channel stats.
// Statistics always come from the windowed full-resolution data, never from
// the decimated view handed back for charting.

use std::collections::BTreeMap;

use crate::models::{Channel, Sample, SummaryData, Window};

use super::{energy, resample, window};

/// How a summary request can fail; the routes map these onto HTTP statuses
/// and do all operational logging.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("unknown data set: {0}")]
    UnknownDataset(String),
    #[error("store failure: {0}")]
    Store(#[source] anyhow::Error),
}

/// Parses an optional channel selector from its wire name. A missing
/// selector means all three channels.
pub fn parse_channels(channel: Option<&str>) -> Result<Vec<Channel>, SummaryError> {
    match channel {
        None => Ok(Channel::ALL.to_vec()),
        Some(s) => match Channel::from_wire(s) {
            Some(c) => Ok(vec![c]),
            None => Err(SummaryError::InvalidRequest(format!(
                "Unknown channel: {}",
                s
            ))),
        },
    }
}

/// Filters the series to the window, decimates toward the target resolution
/// under the point budget, and computes per-channel peak and total
/// consumption over the full windowed data.
pub fn summarize(
    series: &[Sample],
    window: Window,
    target_res: Option<i64>,
    max: usize,
    channels: &[Channel],
) -> Result<SummaryData, SummaryError> {
    if max == 0 {
        return Err(SummaryError::InvalidRequest(
            "max must be positive".to_string(),
        ));
    }

    let windowed = window::filter_window(series, window);
    let resampled = resample::downsample(&windowed, target_res, max);

    let end_idx = windowed.len().saturating_sub(1);
    let mut stats = BTreeMap::new();
    for &channel in channels {
        stats.insert(channel, energy::channel_stat(&windowed, channel, 0, end_idx));
    }

    Ok(SummaryData {
        points: resampled.points,
        original_res: resampled.original_res,
        actual_res: resampled.actual_res,
        stats,
    })
}

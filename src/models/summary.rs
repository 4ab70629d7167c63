// Resample output and per-channel summary statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Channel, Sample};

/// Decimated points plus the resolutions describing them. Both resolutions are
/// None when the source series had fewer than two samples (serialized as null,
/// never as a fake zero).
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleResult {
    pub points: Vec<Sample>,
    /// Native interval of the source series, in ms.
    pub original_res: Option<i64>,
    /// original_res times the decimation step, in ms.
    pub actual_res: Option<i64>,
}

/// The sample value at which one channel peaked, and when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakSample {
    pub value: f64,
    pub ts: i64,
}

/// Peak and total consumption for one channel over a window. Both are None
/// ("N/A") for a degenerate range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyStat {
    pub peak: Option<PeakSample>,
    pub total_energy_kwh: Option<i64>,
}

/// Combined answer for one summary request: the resampled view plus statistics
/// computed from the windowed full-resolution data.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryData {
    pub points: Vec<Sample>,
    pub original_res: Option<i64>,
    pub actual_res: Option<i64>,
    pub stats: BTreeMap<Channel, EnergyStat>,
}

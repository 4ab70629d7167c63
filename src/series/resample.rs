// Native-resolution inference and decimation. Energy statistics over the
// same windowed data live in series::energy.

use crate::models::{ResampleResult, Sample};

/// Milliseconds between the first two samples, or None for a series of fewer
/// than two. The interval is assumed uniform across the whole series; a gap
/// right after the first pair goes undetected (see tests).
pub fn infer_resolution(samples: &[Sample]) -> Option<i64> {
    match samples {
        [first, second, ..] => Some(second.ts - first.ts),
        _ => None,
    }
}

/// Decimation step for a target resolution: ceil(target / native), minimum 1.
/// A non-positive target (no decimation requested) and a degenerate native
/// resolution (duplicate leading timestamps) both degrade to 1.
pub fn decimation_step(native_res: i64, target_res: Option<i64>) -> i64 {
    match target_res {
        Some(target) if target > 0 && native_res > 0 => {
            ((target + native_res - 1) / native_res).max(1)
        }
        _ => 1,
    }
}

/// Keeps every step-th sample, stopping as soon as `max` points are kept.
/// The point budget wins over covering the span: remaining samples are
/// dropped, not re-spaced. A 0- or 1-sample series comes back verbatim with
/// both resolutions undefined.
pub fn downsample(samples: &[Sample], target_res: Option<i64>, max: usize) -> ResampleResult {
    if samples.len() <= 1 {
        return ResampleResult {
            points: samples.to_vec(),
            original_res: None,
            actual_res: None,
        };
    }

    let native_res = samples[1].ts - samples[0].ts;
    let step = decimation_step(native_res, target_res);

    let mut points = Vec::new();
    for (i, sample) in samples.iter().enumerate() {
        if points.len() >= max {
            break;
        }
        if (i as i64) % step == 0 {
            points.push(*sample);
        }
    }

    ResampleResult {
        points,
        original_res: Some(native_res),
        actual_res: Some(native_res * step),
    }
}

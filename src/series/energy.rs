// Energy integration over one channel: peak scan plus a trapezoid total
// that splits intervals at their zero crossing when the power reverses sign.

use crate::models::{Channel, EnergyStat, PeakSample, Sample};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Peak and total consumption for one channel over samples[begin_idx..=end_idx].
pub fn channel_stat(
    samples: &[Sample],
    channel: Channel,
    begin_idx: usize,
    end_idx: usize,
) -> EnergyStat {
    EnergyStat {
        peak: peak(samples, channel, begin_idx, end_idx),
        total_energy_kwh: total_energy_kwh(samples, channel, begin_idx, end_idx),
    }
}

/// Highest value in the inclusive index range with its timestamp; the
/// earliest of equal maxima wins (replacement only on strictly greater).
/// None for a degenerate range (single index, or a series of fewer than two
/// samples).
pub fn peak(
    samples: &[Sample],
    channel: Channel,
    begin_idx: usize,
    end_idx: usize,
) -> Option<PeakSample> {
    if samples.len() <= 1 || begin_idx >= end_idx || end_idx >= samples.len() {
        return None;
    }

    let mut best = PeakSample {
        value: samples[begin_idx].channel(channel),
        ts: samples[begin_idx].ts,
    };
    for s in &samples[begin_idx + 1..=end_idx] {
        let v = s.channel(channel);
        if v > best.value {
            best = PeakSample { value: v, ts: s.ts };
        }
    }
    Some(best)
}

/// Signed total consumption in kWh, rounded half-up toward positive infinity.
/// Integrates pairwise: a rectangle when the value holds, a zero-crossing
/// split when the sign reverses, otherwise a rectangle up to the smaller
/// value plus a signed triangle on top. None for a degenerate range.
///
/// The interval width `res` is the delta of the last pair in the range,
/// applied to every non-flip pair; a known approximation when spacing varies.
pub fn total_energy_kwh(
    samples: &[Sample],
    channel: Channel,
    begin_idx: usize,
    end_idx: usize,
) -> Option<i64> {
    if samples.len() <= 1 || begin_idx >= end_idx || end_idx >= samples.len() {
        return None;
    }

    let res = (samples[end_idx].ts - samples[end_idx - 1].ts) as f64;

    let mut total_wh = 0.0;
    for i in begin_idx + 1..=end_idx {
        let prev = samples[i - 1].channel(channel);
        let next = samples[i].channel(channel);

        if prev == next {
            total_wh += prev * (res / MS_PER_HOUR);
        } else if prev != 0.0 && next != 0.0 && prev.signum() != next.signum() {
            // Power reverses inside the interval: split at the zero crossing
            // into two signed triangles so the halves do not cancel.
            let prev_ts = samples[i - 1].ts as f64;
            let next_ts = samples[i].ts as f64;
            let t0 = prev_ts - prev * ((next_ts - prev_ts) / (next - prev));

            total_wh += (t0 - prev_ts) / MS_PER_HOUR * prev * 0.5;
            total_wh += (next_ts - t0) / MS_PER_HOUR * next * 0.5;
        } else {
            let width = res / MS_PER_HOUR;
            let triangle_height = (prev - next).abs();
            let rect_height = prev.min(next);
            let sign = if prev == 0.0 {
                sign_or_zero(next)
            } else {
                sign_or_zero(prev)
            };

            total_wh += width * triangle_height * 0.5 * sign;
            total_wh += width * rect_height;
        }
    }

    Some(((total_wh / 1000.0) + 0.5).floor() as i64)
}

/// Signum that maps 0.0 to 0.0 (f64::signum gives 1.0 there).
fn sign_or_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v.signum() }
}

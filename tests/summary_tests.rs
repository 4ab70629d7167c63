// Summary facade tests: orchestration of filter, resample, and energy stats.

mod common;

use common::{MIN_15, MIN_30, sample, series};
use solarviz::models::{Channel, Window};
use solarviz::series::summary::{SummaryError, parse_channels, summarize};

#[test]
fn summarize_end_to_end_scenario() {
    // 5 samples at 15-min native resolution, ramp 0..10000..0 W, target
    // 30 min, max 10, full window.
    let s = series(0, MIN_15, &[0.0, 5000.0, 10_000.0, 5000.0, 0.0]);
    let data = summarize(&s, Window::unbounded(), Some(MIN_30), 10, &Channel::ALL).unwrap();

    assert_eq!(data.points.len(), 3);
    assert_eq!(data.points[1].ts, 2 * MIN_15);
    assert_eq!(data.original_res, Some(MIN_15));
    assert_eq!(data.actual_res, Some(MIN_30));

    let stat = data.stats[&Channel::FacilityLoad];
    let peak = stat.peak.unwrap();
    assert_eq!(peak.value, 10_000.0);
    assert_eq!(peak.ts, 2 * MIN_15);
    assert_eq!(stat.total_energy_kwh, Some(5));
    assert_eq!(data.stats.len(), 3);
}

/// Statistics reflect the windowed full-resolution data, not the decimated
/// view: the peak at an odd index survives even when decimation drops it.
#[test]
fn summarize_stats_ignore_decimation() {
    let s = series(0, MIN_15, &[0.0, 9000.0, 0.0, 0.0, 0.0]);
    let data = summarize(&s, Window::unbounded(), Some(MIN_30), 10, &Channel::ALL).unwrap();

    assert!(data.points.iter().all(|p| p.facility_load != 9000.0));
    let peak = data.stats[&Channel::FacilityLoad].peak.unwrap();
    assert_eq!(peak.value, 9000.0);
    assert_eq!(peak.ts, MIN_15);
}

#[test]
fn summarize_applies_window_before_everything() {
    let s = series(0, MIN_15, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    let window = Window::new(Some(MIN_15), Some(3 * MIN_15));
    let data = summarize(&s, window, None, 10, &[Channel::FacilityLoad]).unwrap();

    assert_eq!(data.points.len(), 3);
    assert_eq!(data.points[0].ts, MIN_15);
    // Peak comes from the windowed data: 4.0, not the out-of-window 5.0.
    assert_eq!(
        data.stats[&Channel::FacilityLoad].peak.unwrap().value,
        4.0
    );
}

#[test]
fn summarize_degenerate_series_has_na_stats() {
    let data = summarize(
        &[sample(0, 7.0)],
        Window::unbounded(),
        None,
        10,
        &Channel::ALL,
    )
    .unwrap();
    assert_eq!(data.points.len(), 1);
    assert_eq!(data.original_res, None);
    assert_eq!(data.actual_res, None);
    let stat = data.stats[&Channel::PvLoad];
    assert_eq!(stat.peak, None);
    assert_eq!(stat.total_energy_kwh, None);
}

#[test]
fn summarize_rejects_zero_max() {
    let s = series(0, MIN_15, &[1.0, 2.0]);
    let err = summarize(&s, Window::unbounded(), None, 0, &Channel::ALL).unwrap_err();
    assert!(matches!(err, SummaryError::InvalidRequest(_)));
}

#[test]
fn parse_channels_defaults_to_all() {
    assert_eq!(parse_channels(None).unwrap(), Channel::ALL.to_vec());
    assert_eq!(
        parse_channels(Some("storageGen")).unwrap(),
        vec![Channel::StorageGen]
    );
}

#[test]
fn parse_channels_rejects_unknown_name() {
    let err = parse_channels(Some("windLoad")).unwrap_err();
    assert!(matches!(err, SummaryError::InvalidRequest(_)));
}

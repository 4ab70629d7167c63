// Model serialization tests (JSON camelCase wire names)

use solarviz::models::*;

#[test]
fn test_sample_serialization_camel_case() {
    let s = Sample {
        ts: 1_483_228_800_000,
        pv_load: 5000.0,
        facility_load: 3000.0,
        storage_gen: 2000.0,
    };
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains("\"pvLoad\""));
    assert!(json.contains("\"facilityLoad\""));
    assert!(json.contains("\"storageGen\""));
    let back: Sample = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn test_channel_wire_names_roundtrip() {
    for channel in Channel::ALL {
        assert_eq!(Channel::from_wire(channel.wire_name()), Some(channel));
    }
    assert_eq!(Channel::from_wire("PvLoad"), None);
    assert_eq!(Channel::from_wire(""), None);
}

#[test]
fn test_sample_channel_accessor() {
    let s = Sample {
        ts: 0,
        pv_load: 1.0,
        facility_load: 2.0,
        storage_gen: 3.0,
    };
    assert_eq!(s.channel(Channel::PvLoad), 1.0);
    assert_eq!(s.channel(Channel::FacilityLoad), 2.0);
    assert_eq!(s.channel(Channel::StorageGen), 3.0);
}

#[test]
fn test_window_contains_inclusive() {
    let w = Window::new(Some(10), Some(20));
    assert!(w.contains(10));
    assert!(w.contains(20));
    assert!(!w.contains(9));
    assert!(!w.contains(21));
    assert!(Window::unbounded().contains(i64::MIN));
    assert!(Window::new(Some(10), None).contains(i64::MAX));
}

#[test]
fn test_energy_stat_na_serializes_as_null() {
    let stat = EnergyStat {
        peak: None,
        total_energy_kwh: None,
    };
    let json = serde_json::to_value(stat).unwrap();
    assert!(json["peak"].is_null());
    assert!(json["totalEnergyKwh"].is_null());
}

#[test]
fn test_energy_stat_peak_wire_shape() {
    let stat = EnergyStat {
        peak: Some(PeakSample {
            value: 9000.0,
            ts: 42,
        }),
        total_energy_kwh: Some(5),
    };
    let json = serde_json::to_value(stat).unwrap();
    assert_eq!(json["peak"]["value"], 9000.0);
    assert_eq!(json["peak"]["ts"], 42);
    assert_eq!(json["totalEnergyKwh"], 5);
}

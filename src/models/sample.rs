// Load sample, channel and window models

use serde::{Deserialize, Serialize};

/// One reading from a load log: instantaneous power per channel, in watts.
/// Timestamps are milliseconds since epoch, UTC. Within a series samples are
/// ordered by non-decreasing ts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub ts: i64,
    pub pv_load: f64,
    pub facility_load: f64,
    pub storage_gen: f64,
}

impl Sample {
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::PvLoad => self.pv_load,
            Channel::FacilityLoad => self.facility_load,
            Channel::StorageGen => self.storage_gen,
        }
    }
}

/// The three data channels of a sample; serializes to the wire names ("pvLoad", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    PvLoad,
    FacilityLoad,
    StorageGen,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::PvLoad, Channel::FacilityLoad, Channel::StorageGen];

    /// Parse from the wire name (e.g. "facilityLoad"); None for anything else.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "pvLoad" => Some(Channel::PvLoad),
            "facilityLoad" => Some(Channel::FacilityLoad),
            "storageGen" => Some(Channel::StorageGen),
            _ => None,
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Channel::PvLoad => "pvLoad",
            Channel::FacilityLoad => "facilityLoad",
            Channel::StorageGen => "storageGen",
        }
    }
}

/// Inclusive timestamp range; a missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub begin: Option<i64>,
    pub end: Option<i64>,
}

impl Window {
    pub fn new(begin: Option<i64>, end: Option<i64>) -> Self {
        Self { begin, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, ts: i64) -> bool {
        self.begin.is_none_or(|b| ts >= b) && self.end.is_none_or(|e| ts <= e)
    }
}

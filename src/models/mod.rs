// Domain models (ported from the Node dashboard)

mod sample;
mod summary;

pub use sample::{Channel, Sample, Window};
pub use summary::{EnergyStat, PeakSample, ResampleResult, SummaryData};

// Resampling and energy statistics over load series.
// Pure computation only: no I/O, no logging. Loaders (store_repo, csv_repo)
// produce the samples; routes translate results to the wire.

pub mod energy;
pub mod resample;
pub mod summary;
pub mod window;

// Inclusive timestamp range filter.

use crate::models::{Sample, Window};

/// Samples whose timestamp lies inside the window, both bounds inclusive,
/// order preserved. The store path expresses the same predicate as SQL
/// bounds and the csv path applies it per record; all three must agree.
pub fn filter_window(samples: &[Sample], window: Window) -> Vec<Sample> {
    samples
        .iter()
        .copied()
        .filter(|s| window.contains(s.ts))
        .collect()
}

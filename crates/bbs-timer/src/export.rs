//! Export naming.

use crate::time::{TimeRange, TimeSpec};

/// File name prefix shared by every exported timer.
pub const FILE_PREFIX: &str = "bbs_timer_";

/// File name for a range: `bbs_timer_<start>_to_<end>.json`.
///
/// Each endpoint contributes its three raw labels back to back, so a
/// disabled field shows up as `-`.
#[must_use]
pub fn export_filename(range: &TimeRange) -> String {
    format!(
        "{FILE_PREFIX}{}_to_{}.json",
        compact_label(&range.start),
        compact_label(&range.end)
    )
}

fn compact_label(spec: &TimeSpec) -> String {
    spec.fields().map(|(_, field)| field.raw_label()).collect()
}

//! Check command handler

use crate::error::CliResult;
use crate::output::Reporter;
use crate::CheckArgs;
use bbs_timer::{export_filename, validate, Direction, TimeRange};

/// What generating a range would produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of keyframes
    pub keyframes: usize,
    /// Counting direction
    pub direction: Direction,
    /// Export file name
    pub filename: String,
}

impl CheckSummary {
    /// Summarize a validated range
    #[must_use]
    pub fn of(range: &TimeRange) -> Self {
        Self {
            keyframes: range.sample_count(),
            direction: range.direction(),
            filename: export_filename(range),
        }
    }

    /// Plain-text listing
    #[must_use]
    pub fn render(&self, range: &TimeRange) -> String {
        format!(
            "Start: {}\nEnd: {}\nKeyframes: {}\nDirection: {}\nFile: {}\n",
            range.start, range.end, self.keyframes, self.direction, self.filename
        )
    }
}

/// Execute the check command
pub fn execute_check(reporter: &Reporter, args: &CheckArgs) -> CliResult<CheckSummary> {
    let range = args.range.range();
    validate(&range)?;

    let summary = CheckSummary::of(&range);
    print!("{}", summary.render(&range));
    reporter.success("Range is valid");
    Ok(summary)
}

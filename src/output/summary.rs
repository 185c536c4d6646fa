use std::time::Duration;

use crate::stats::ConvertStats;

pub fn make_summary(source: impl Into<String>, stats: &ConvertStats, took: Duration) -> String {
    let mut summary = String::new();
    let mut max_len = 0;
    let mut push = |s: &str| {
        let len = s.trim_end().len();
        if len > max_len {
            max_len = len;
        }
        summary.push_str(s);
    };

    push(&format!("Converted records from '{}'\n", source.into()));
    push(&format!("Records: {}\n", stats.records));
    push(&format!("Rejected Records: {}\n", stats.rejected_records));
    push(&format!("Passed Through: {}\n", stats.passed_through));
    push(&format!("Fields Converted: {}\n", stats.converted));
    push(&format!("Fields Skipped: {}\n", stats.skipped()));
    push(&format!("Fields Failed: {}\n", stats.failed));
    push(&format!("Took: {:.2?}\n", took));

    let sep = "=".repeat(max_len);
    format!("{}\n{}{}\n", sep, summary, sep)
}

pub fn print_summary(source: impl Into<String>, stats: &ConvertStats, took: Duration) {
    eprint!("{}", make_summary(source, stats, took));
}

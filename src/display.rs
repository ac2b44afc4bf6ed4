use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

use crate::types::Summary;

/// Render an average with a fractional part always present (`20.0`, `20.5`).
///
/// Values below `1e-4` or of `1e16` and above switch to exponent form
/// (`1e-5`), which is how `f64` debug output behaves.
pub fn format_average(average_ms: f64) -> String {
    // Debug formatting keeps the trailing ".0" that Display drops.
    format!("{:?}", average_ms)
}

fn summary_line(num_trials: usize, average: impl Display) -> String {
    format!("Average solve time for {num_trials} trials: {average} milliseconds")
}

/// `Average solve time for <n> trials: <avg> milliseconds`
pub fn format_summary(summary: &Summary) -> String {
    summary_line(summary.num_trials, format_average(summary.average_ms))
}

/// Prints the summary line, highlighting the average on a colour terminal.
pub fn print_summary(summary: &Summary) {
    let average = format_average(summary.average_ms);
    println!(
        "{}",
        summary_line(
            summary.num_trials,
            average.if_supports_color(Stream::Stdout, |s| s.yellow())
        )
    );
}

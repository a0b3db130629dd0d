//! Output formatting for solver results

use chrono::TimeDelta;
use puzzle_solver::SolveResult;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print one solved part. The parse timing is shown alongside the
    /// first part only.
    pub fn print_part(&self, part: u8, result: &SolveResult, parse: Option<TimeDelta>) {
        if self.quiet {
            println!("{}", result.answer);
            return;
        }
        let parse_timing = parse
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        println!(
            "Part {}: {} ({}solve: {})",
            part,
            result.answer,
            parse_timing,
            format_duration(result.duration())
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

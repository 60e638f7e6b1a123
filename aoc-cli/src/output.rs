//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::SolverInfo;
use chrono::TimeDelta;
use std::borrow::Cow;

const PART_WORDS: [&str; 25] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty", "twenty-one", "twenty-two", "twenty-three", "twenty-four", "twenty-five",
];

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }

    /// Print registered solvers, one per line
    pub fn print_list(&self, solvers: &[SolverInfo]) {
        for info in solvers {
            println!("{}", format_info(info));
        }
        if !self.quiet {
            println!();
            println!("{} solver(s)", solvers.len());
        }
    }
}

/// Spelled-out part number ("one", "two", ...)
pub fn part_word(part: u8) -> Cow<'static, str> {
    match PART_WORDS.get(usize::from(part).wrapping_sub(1)) {
        Some(word) => Cow::Borrowed(*word),
        None => Cow::Owned(part.to_string()),
    }
}

/// Full result line: `2015/01 Part one: 74 (parse: 12µs, solve: 3µs)`
pub fn format_result(result: &SolverResult) -> String {
    let prefix = format!(
        "{}/{:02} Part {}",
        result.year,
        result.day,
        part_word(result.part)
    );

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

fn format_info(info: &SolverInfo) -> String {
    let mut line = format!("{}/{:02} ({} parts)", info.year, info.day, info.parts);
    if !info.tags.is_empty() {
        line.push_str(&format!(" [{}]", info.tags.join(", ")));
    }
    if info.embedded_input.is_some() {
        line.push_str(" embedded input");
    }
    line
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

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

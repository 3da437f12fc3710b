//! Formatting helpers for report display.
//!
//! Arrays are laid out like a numeric REPL would print them: nested
//! brackets, right-aligned cells, and long arrays summarised with `...`
//! between the leading and trailing rows. When the `ansi` feature is enabled,
//! headings and verdicts include ANSI color codes.

use core::fmt::Write;

use crate::colors::{bad, bold, dim, good, highlight};
use crate::result::ExperimentReport;
use crate::types::Matrix;

/// Separator line used in output.
pub const SEPARATOR: &str = "──────────────────────────────────────────────────────────────";

/// Arrays with more elements than this are summarised by default.
pub const DEFAULT_SUMMARY_THRESHOLD: usize = 1000;

/// Rows kept at each end of a summarised array.
pub const DEFAULT_EDGE_ROWS: usize = 3;

/// Layout options for [`format_report_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Summarise arrays with more elements than this; `None` prints everything.
    pub summarize_above: Option<usize>,
    /// Rows kept at each end of a summarised array.
    pub edge_rows: usize,
    /// Decimal places for the response and effect arrays.
    pub decimals: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            summarize_above: Some(DEFAULT_SUMMARY_THRESHOLD),
            edge_rows: DEFAULT_EDGE_ROWS,
            decimals: 4,
        }
    }
}

impl FormatOptions {
    /// Print every row of every array.
    pub fn full() -> Self {
        Self {
            summarize_above: None,
            ..Self::default()
        }
    }
}

// ============================================================================
// Main formatting functions
// ============================================================================

/// Format a report with default options.
pub fn format_report_plain(report: &ExperimentReport) -> String {
    format_report_with(report, &FormatOptions::default())
}

/// Format the four arrays in pipeline order, framed by a header and a
/// verdict footer.
pub fn format_report_with(report: &ExperimentReport, options: &FormatOptions) -> String {
    let mut out = String::new();

    writeln!(out, "factorial").unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(out).unwrap();
    format_header(&mut out, report);

    let [design_shape, shifted_shape, response_shape, effects_shape] = report.shapes();
    let edge = edge_rows_for(report.design.len(), options);

    format_section(&mut out, "Design matrix", design_shape);
    writeln!(out, "{}", format_array(&report.design, 0, edge)).unwrap();
    writeln!(out).unwrap();

    let title = format!("Shifted design (M + {})", trim_float(report.shift));
    format_section(&mut out, &title, shifted_shape);
    writeln!(out, "{}", format_array(&report.shifted, 0, edge)).unwrap();
    writeln!(out).unwrap();

    let edge = edge_rows_for(report.response.len(), options);
    format_section(&mut out, "Simulated response", response_shape);
    writeln!(out, "{}", format_array(&report.response, options.decimals, edge)).unwrap();
    writeln!(out).unwrap();

    format_section(&mut out, "Main effects", effects_shape);
    writeln!(
        out,
        "{}",
        format_array(&report.effects, options.decimals, None)
    )
    .unwrap();
    writeln!(out).unwrap();

    format_footer(&mut out, report, options.decimals);
    write!(out, "{}", SEPARATOR).unwrap();

    out
}

/// Format a 2D array with `decimals` places.
///
/// With `edge_rows = Some(k)` and more than 2k rows, only the first and last
/// k rows are printed, separated by ` ...`. `Some(0)` prints only the marker.
pub fn format_array(matrix: &Matrix, decimals: usize, edge_rows: Option<usize>) -> String {
    let nrows = matrix.nrows();
    if nrows == 0 {
        return "[]".to_string();
    }

    let (visible, elided_at): (Vec<usize>, Option<usize>) = match edge_rows {
        Some(k) if nrows > 2 * k => ((0..k).chain(nrows - k..nrows).collect(), Some(k)),
        _ => ((0..nrows).collect(), None),
    };
    if visible.is_empty() {
        return "[ ...]".to_string();
    }

    let cells: Vec<Vec<String>> = visible
        .iter()
        .map(|&i| matrix.row(i).iter().map(|v| format!("{:.*}", decimals, v)).collect())
        .collect();
    let width = cells
        .iter()
        .flat_map(|row| row.iter().map(String::len))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let last = cells.len() - 1;
    for (i, row) in cells.iter().enumerate() {
        if Some(i) == elided_at {
            out.push_str(" ...\n");
        }
        out.push_str(if i == 0 { "[[" } else { " [" });
        let line: Vec<String> = row.iter().map(|c| format!("{:>width$}", c)).collect();
        out.push_str(&line.join(" "));
        out.push(']');
        if i == last {
            out.push(']');
        } else {
            out.push('\n');
        }
    }
    out
}

// ============================================================================
// Section formatting helpers
// ============================================================================

fn format_header(out: &mut String, report: &ExperimentReport) {
    writeln!(out, "  Factors: {}", report.factors).unwrap();
    writeln!(out, "  Runs:    {}", report.runs).unwrap();
    writeln!(
        out,
        "  Noise:   N(0, {}\u{00B2})",
        trim_float(report.noise_sd)
    )
    .unwrap();
    writeln!(out, "  Seed:    {}", dim(&format!("{:#x}", report.seed))).unwrap();
    writeln!(out).unwrap();
}

fn format_section(out: &mut String, title: &str, shape: (usize, usize)) {
    writeln!(
        out,
        "  {} {}",
        bold(title),
        dim(&format!("({} \u{00D7} {})", shape.0, shape.1))
    )
    .unwrap();
}

fn format_footer(out: &mut String, report: &ExperimentReport, decimals: usize) {
    if report.orthogonal {
        writeln!(out, "  {}", good("\u{2713} Design columns are orthogonal")).unwrap();
    } else {
        writeln!(out, "  {}", bad("\u{2717} Design columns are not orthogonal")).unwrap();
    }
    writeln!(
        out,
        "    Expected effect (noiseless): {}",
        highlight(&format!("{:.*}", decimals, report.expected_effect))
    )
    .unwrap();
    if let Some((factor, value)) = report.dominant() {
        writeln!(
            out,
            "    Largest effect:              factor {} ({:.*})",
            factor, decimals, value
        )
        .unwrap();
    }

    if let Some(summary) = &report.replicates {
        let means: Vec<String> = summary
            .mean_effects
            .iter()
            .map(|m| format!("{:.*}", decimals, m))
            .collect();
        writeln!(
            out,
            "    Mean over {} replicates:  [{}]",
            summary.replicates,
            means.join(", ")
        )
        .unwrap();
        writeln!(
            out,
            "    Max |bias|:                 {:.*}",
            decimals, summary.max_bias
        )
        .unwrap();
    }
    writeln!(out).unwrap();
}

fn edge_rows_for(elements: usize, options: &FormatOptions) -> Option<usize> {
    match options.summarize_above {
        Some(threshold) if elements > threshold => Some(options.edge_rows),
        _ => None,
    }
}

/// Shortest of `{}` and `{:.4}` for header values like 10 or 0.5.
fn trim_float(x: f64) -> String {
    let s = format!("{}", x);
    if s.len() <= 8 {
        s
    } else {
        format!("{:.4}", x)
    }
}

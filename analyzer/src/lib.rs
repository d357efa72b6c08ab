use anyhow::{bail, Context, Result};
use lexsim_core::{SimilarityReport, Threshold};
use serde::Serialize;

const RULE: &str = "--------------------------------------------------------------------------------";
const TITLE_WIDTH: usize = 24;
const PER_LINE: usize = 2;

/// Parse a threshold typed at the prompt.
///
/// A bare integer is a percentage, so "1" means 1%. A decimal in `[0, 1]` is a fraction
/// ("0.8", "1.0"); a larger decimal is a percentage. Decimals are rounded, not truncated.
pub fn parse_threshold(input: &str) -> Result<Threshold> {
    let input = input.trim();
    if input.is_empty() {
        bail!("no threshold given");
    }
    let percent = if input.contains('.') {
        let value: f64 = input.parse().with_context(|| format!("invalid threshold '{input}'"))?;
        if !(0.0..=100.0).contains(&value) {
            bail!("threshold '{input}' is outside 0..=100");
        }
        let scaled = if value <= 1.0 { value * 100.0 } else { value };
        scaled.round() as u32
    } else {
        input.parse::<u32>().with_context(|| format!("invalid threshold '{input}'"))?
    };
    Ok(Threshold::new(percent)?)
}

/// Render the per-document similarity table followed by the suspected-author list.
pub fn render_table(report: &SimilarityReport) -> String {
    let mut out = String::new();
    out.push_str("Text (title)             | Similarities (%)\n");
    out.push_str(RULE);
    out.push('\n');

    for (i, row) in report.rows.iter().enumerate() {
        let mut cells = String::new();
        for (n, sim) in row.similarities.iter().enumerate() {
            if n > 0 && n % PER_LINE == 0 {
                cells.push_str(",\n");
                cells.push_str(&" ".repeat(TITLE_WIDTH + 1));
                cells.push_str("| ");
            } else if n > 0 {
                cells.push(',');
            }
            cells.push_str(&format!("{}({}%)", sim.title, sim.percent));
        }
        // Trailing space kept from the original console layout.
        out.push_str(&format!("{:<width$} | {} \n", row.title, cells, width = TITLE_WIDTH));
        if i + 1 < report.rows.len() {
            out.push_str(RULE);
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str("Suspected Texts With Same Authors\n");
    out.push_str(RULE);
    out.push('\n');
    for m in &report.matches {
        out.push_str(&format!("'{}' and '{}' may have the same author ({}% similar).\n", m.first, m.second, m.percent));
    }
    out
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a SimilarityReport,
    unreadable: &'a [String],
}

/// Render the report as pretty JSON, including titles that could not be read.
pub fn render_json(report: &SimilarityReport, unreadable: &[String]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput { report, unreadable })?)
}

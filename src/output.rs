use std::io::Write;

use crate::policy::ConstraintViolation;
use crate::report::LicenseReport;

/// Cells wider than this are wrapped onto several lines.
pub const WRAP_WIDTH: usize = 60;

pub fn format_report_table(report: &LicenseReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("📦 License Summary ({} dependencies)\n", report.total_dependencies()));

    let summary: Vec<Vec<String>> = report
        .summary
        .iter()
        .map(|row| vec![row.license.clone(), row.count.to_string()])
        .collect();
    output.push_str(&render_table(&["license", "count"], &summary));

    for license in &report.licenses {
        output.push_str(&format!("\nLicense: {} ({})\n", license.short_name, license.source));

        let rows: Vec<Vec<String>> = license.rows.iter().map(|row| row.to_vec()).collect();
        output.push_str(&render_table(&["CAN", "CAN NOT", "MUST"], &rows));
    }

    output
}

pub fn format_violations_table(violations: &[ConstraintViolation]) -> String {
    let mut output = String::new();

    let found: Vec<&ConstraintViolation> = violations.iter().filter(|v| v.is_violated()).collect();
    if found.is_empty() {
        output.push_str("✅ No license violations found!\n");
        return output;
    }

    for violation in found {
        output.push_str(&format!("🚫 {}\n", violation.reason));

        let rows: Vec<Vec<String>> = violation
            .offending_dependencies
            .iter()
            .map(|d| vec![d.name.clone(), d.version.clone(), d.license.clone()])
            .collect();
        output.push_str(&render_table(&["Package", "Version", "License"], &rows));
        output.push('\n');
    }

    output
}

/// Write rendered output to a sink, ending with a newline.
pub fn write_output<W: Write>(mut sink: W, content: &str) -> std::io::Result<()> {
    sink.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        sink.write_all(b"\n")?;
    }
    sink.flush()
}

/// Render a box-drawn table. Cells are wrapped at [`WRAP_WIDTH`].
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let wrapped: Vec<Vec<Vec<String>>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| wrap(cell, WRAP_WIDTH)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in &wrapped {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            let longest = cell.iter().map(|line| width(line)).max().unwrap_or(0);
            widths[i] = widths[i].max(longest);
        }
    }

    let mut output = String::new();

    // Table header
    output.push_str(&border(&widths, '┌', '┬', '┐'));
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    output.push_str(&line(&widths, &header_cells));
    output.push_str(&border(&widths, '├', '┼', '┤'));

    // Table rows
    for row in &wrapped {
        let height = row.iter().map(Vec::len).max().unwrap_or(1).max(1);
        for n in 0..height {
            let cells: Vec<String> = (0..widths.len())
                .map(|i| {
                    row.get(i)
                        .and_then(|cell| cell.get(n))
                        .cloned()
                        .unwrap_or_default()
                })
                .collect();
            output.push_str(&line(&widths, &cells));
        }
    }

    // Table footer
    output.push_str(&border(&widths, '└', '┴', '┘'));

    output
}

fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&middle.to_string()), right)
}

fn line(widths: &[usize], cells: &[String]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(w, cell)| format!(" {}{} ", cell, " ".repeat(w - width(cell))))
        .collect();
    format!("│{}│\n", padded.join("│"))
}

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Greedy word wrap; words longer than `max` are split.
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while width(&word) > max {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split: String = word.chars().take(max).collect();
            word = word.chars().skip(max).collect();
            lines.push(split);
        }

        if current.is_empty() {
            current = word;
        } else if width(&current) + 1 + width(&word) <= max {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

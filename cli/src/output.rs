use anyhow::Result;
use colored::{Color, Colorize};
use dupdetect_core::{FileMetadata, Report};
use std::io::Write;
use std::path::Path;

pub const FILE_COLUMN_LABEL: &str = "File";
pub const LOC_COLUMN_SUFFIX: &str = ",#LoC";
pub const SIMILARITY_COLUMN_LABEL: &str = "Similarity (%)";
pub const THRESHOLD_EXCEEDED_MESSAGE: &str = "Code duplication threshold exceeded. Please consult logs.";

fn similarity_color(percentage: f64) -> Color {
    if percentage < 10.0 {
        Color::Green
    } else if percentage < 20.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Line count as printed: empty when unknown.
fn loc_field(metadata: &Option<FileMetadata>) -> String {
    metadata
        .as_ref()
        .and_then(|m| m.line_count)
        .map(|n| n.to_string())
        .unwrap_or_default()
}

/// Colored console report. `name_width` is the widest displayed path.
pub fn write_text<W: Write>(out: &mut W, report: &Report, name_width: usize, show_loc: bool) -> Result<()> {
    let mut width = name_width;
    let mut column_label = FILE_COLUMN_LABEL.to_string();
    if show_loc {
        column_label.push_str(LOC_COLUMN_SUFFIX);
        width += LOC_COLUMN_SUFFIX.len();
    }
    let rule = "-".repeat(width + SIMILARITY_COLUMN_LABEL.len());

    for file in report.iter() {
        let loc_info = if show_loc { format!(",{}", loc_field(&file.metadata)) } else { String::new() };
        writeln!(out, "\n\n")?;
        writeln!(out, "{}", format!("Code duplication probability for {}{}", file.identifier, loc_info).bright_magenta())?;
        writeln!(out, "{rule}")?;
        writeln!(out, "{}", format!("{:^width$} {}", column_label, SIMILARITY_COLUMN_LABEL).bold())?;
        writeln!(out, "{rule}")?;
        for entry in &file.entries {
            let mut info = entry.identifier.clone();
            if show_loc {
                info.push(',');
                info.push_str(&loc_field(&entry.metadata));
            }
            let pct = format!("{:.2}", entry.similarity).color(similarity_color(entry.similarity));
            writeln!(out, "{info:<width$}     {pct}")?;
        }
    }
    if report.threshold_exceeded() {
        writeln!(out, "{THRESHOLD_EXCEEDED_MESSAGE}")?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Shortest form that reads back as the same value, keeping one decimal
/// for whole numbers (`95.5`, `100.0`).
fn csv_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// One row per reported pair, with the unclamped similarity.
pub fn write_csv<W: Write>(writer: W, report: &Report, show_loc: bool) -> Result<()> {
    let mut csv_wrt = csv::Writer::from_writer(writer);
    if show_loc {
        csv_wrt.write_record(["File A", "#LoC A", "File B", "#LoC B", "Similarity"])?;
    } else {
        csv_wrt.write_record(["File A", "File B", "Similarity"])?;
    }
    for file in report.iter() {
        for entry in &file.entries {
            let similarity = csv_number(entry.raw_similarity);
            if show_loc {
                let (loc_a, loc_b) = (loc_field(&file.metadata), loc_field(&entry.metadata));
                csv_wrt.write_record([
                    file.identifier.as_str(),
                    loc_a.as_str(),
                    entry.identifier.as_str(),
                    loc_b.as_str(),
                    similarity.as_str(),
                ])?;
            } else {
                csv_wrt.write_record([file.identifier.as_str(), entry.identifier.as_str(), similarity.as_str()])?;
            }
        }
    }
    csv_wrt.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, report: &Report, show_loc: bool) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, report, show_loc)?;
    tracing::info!(path = %path.display(), "wrote csv report");
    Ok(())
}

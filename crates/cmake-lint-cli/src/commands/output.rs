//! Shared output formatting for lint results.

use anyhow::Result;
use cmake_lint_core::{Report, SourceFile};
use std::collections::HashMap;
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(report: &Report, sources: &[SourceFile], format: OutputFormat) -> Result<()> {
    let rendered = render(report, sources, format)?;
    print!("{rendered}");
    Ok(())
}

fn render(report: &Report, sources: &[SourceFile], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.render(),
        OutputFormat::Json => render_json(report)?,
        OutputFormat::Fancy => render_fancy(report, sources),
    })
}

fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

fn render_fancy(report: &Report, sources: &[SourceFile]) -> String {
    let by_path: HashMap<&Path, &SourceFile> = sources.iter().map(|s| (s.path(), s)).collect();

    let mut out = String::new();
    for diagnostic in &report.diagnostics {
        match by_path.get(diagnostic.file.as_path()) {
            Some(source) => {
                let report = miette::Report::new(diagnostic.to_report(source));
                out.push_str(&format!("{report:?}\n"));
            }
            // Plain line when the source text is not at hand.
            None => out.push_str(&format!("{diagnostic}\n")),
        }
    }
    out
}

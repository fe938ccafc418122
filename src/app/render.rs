use crate::config::OutputFormat;
use crate::domain::model::{SectionReport, SkillReport};
use crate::utils::error::Result;
use std::fmt::Write;

pub const NOTHING_TO_DISPLAY: &str =
    "This character meets or exceeds all reference skill levels. Nothing to display.";

const SKILL_HEADER: &str = "Skill Name";
const LEVEL_HEADER: &str = "Lvl";
const TIME_HEADER: &str = "Time to Ref";

/// 剩餘天數 > 0 顯示 `1.01d`，否則顯示 `Done`
pub fn format_days(days_to_train: f64) -> String {
    if days_to_train > 0.0 {
        format!("{:.2}d", days_to_train)
    } else {
        "Done".to_string()
    }
}

pub fn render(report: &SkillReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &SkillReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &SkillReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Skill Analysis for: {} (Main: {})",
        report.alt, report.main
    );

    if report.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", NOTHING_TO_DISPLAY);
        return out;
    }

    for section in &report.sections {
        let _ = writeln!(out);
        render_section(&mut out, section);
    }

    out
}

fn render_section(out: &mut String, section: &SectionReport) {
    let name_width = section
        .entries
        .iter()
        .map(|e| e.skill_name.chars().count())
        .chain(std::iter::once(SKILL_HEADER.len()))
        .max()
        .unwrap_or(SKILL_HEADER.len());

    let _ = writeln!(out, "{} (Ref: {})", section.name, section.reference_level);
    let _ = writeln!(
        out,
        "  {:<name_width$}  {:>3}  {}",
        SKILL_HEADER, LEVEL_HEADER, TIME_HEADER
    );

    for entry in &section.entries {
        let _ = writeln!(
            out,
            "  {:<name_width$}  {:>3}  {}",
            entry.skill_name,
            entry.current_level,
            format_days(entry.days_to_train)
        );
    }
}

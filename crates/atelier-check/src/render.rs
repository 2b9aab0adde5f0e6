//! Plain-text rendering of command results.

use atelier_themes::{
    InheritanceChain, Resolution, ResolvedFile, ThemeRegistryEntry, ValidationReport,
};
use std::fmt::Write;

pub fn validation(report: &ValidationReport) -> String {
    let mut out = String::new();
    if report.per_theme.is_empty() {
        out.push_str("no themes found\n");
        return out;
    }
    for (slug, theme) in &report.per_theme {
        let status = if theme.valid { "ok" } else { "FAIL" };
        let _ = writeln!(out, "{status:<4} {slug}");
        for error in &theme.errors {
            let _ = writeln!(out, "     - {error}");
        }
    }
    let failed = report.per_theme.values().filter(|t| !t.valid).count();
    let _ = writeln!(
        out,
        "{} themes checked, {failed} failed, {} errors",
        report.per_theme.len(),
        report.error_count()
    );
    out
}

pub fn listing(entries: &[ThemeRegistryEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let meta = &entry.metadata;
        let mut flags = Vec::new();
        if entry.is_active {
            flags.push("active");
        }
        if !entry.is_deletable {
            flags.push("protected");
        }
        let _ = write!(out, "{} {} ({})", meta.slug, meta.version, meta.name);
        if let Some(parent) = &meta.parent {
            let _ = write!(out, " < {parent}");
        }
        if !flags.is_empty() {
            let _ = write!(out, " [{}]", flags.join(", "));
        }
        out.push('\n');
    }
    out
}

pub fn resolution(resolution: &Resolution) -> String {
    format!("{} (from {})\n", resolution.slug, resolution.source)
}

pub fn chain(chain: &InheritanceChain) -> String {
    let mut out = chain.slugs.join(" -> ");
    if let Some(defect) = &chain.defect {
        if !out.is_empty() {
            out.push_str("  ");
        }
        let _ = write!(out, "({defect})");
    }
    out.push('\n');
    out
}

pub fn located(file: Option<&ResolvedFile>) -> String {
    match file {
        Some(file) => format!("{} (from {})\n", file.path.display(), file.theme),
        None => "not found\n".to_string(),
    }
}

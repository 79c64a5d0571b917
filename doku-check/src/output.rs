//! Shared output formatting for consistency reports.
//!
//! Provides JSON and plain-text formatters for `ConsistencyReport`.
//! The plain-text formatter prints one German status line per check,
//! `OK:` or `FEHLER:` prefixed, followed by the findings — downstream CI
//! jobs grep for these prefixes, so the wording is load-bearing.

use std::io::Write;

use crate::report::ConsistencyReport;

/// Format a `ConsistencyReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ConsistencyReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ConsistencyReport` as human-readable plain text to a writer.
///
/// One block per check, in fixed order: streams, links, extensions.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ConsistencyReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.streams.ok {
        writeln!(
            writer,
            "OK: Keine offenen Checkboxen in als abgeschlossen markierten Streams."
        )?;
    } else {
        writeln!(
            writer,
            "FEHLER: Inkonsistenzen gefunden (abgeschlossene Streams mit offenen Checkboxen):"
        )?;
        for issue in &report.streams.issues {
            writeln!(writer, "{}", issue.format_human_readable())?;
        }
    }

    if report.links.ok {
        writeln!(writer, "OK: Keine gebrochenen internen Markdown-Links gefunden.")?;
    } else {
        writeln!(writer, "FEHLER: Gebrochene interne Markdown-Links gefunden:")?;
        for link in &report.links.broken {
            writeln!(writer, "{}", link.format_human_readable())?;
        }
    }

    if report.extensions.ok {
        writeln!(writer, "OK: Keine .MD-Dateien gefunden (nur .md).")?;
    } else {
        writeln!(
            writer,
            "FEHLER: Markdown-Dateien mit falscher Endung gefunden (.MD statt .md):"
        )?;
        for path in &report.extensions.miscased {
            writeln!(writer, "- {}", path.display())?;
        }
    }

    Ok(())
}

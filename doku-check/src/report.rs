//! Consistency report types.

use std::path::PathBuf;

use serde::Serialize;

/// A plan section marked as completed that still contains open checkboxes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct StreamIssue {
    /// Full header line of the section, including the `#### ` prefix.
    pub header: String,
    /// Number of open `- [ ]` checkboxes in the section body.
    pub open_boxes: usize,
}

impl StreamIssue {
    /// Format the issue for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("- {} -> offene Checkboxen: {}", self.header, self.open_boxes)
    }
}

/// An internal Markdown link whose target does not exist on disk.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct BrokenLink {
    /// The Markdown file containing the link.
    pub file: PathBuf,
    /// The link target as written, fragment included.
    pub target: String,
}

impl BrokenLink {
    /// Format the broken link for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("- {} -> {}", self.file.display(), self.target)
    }
}

/// Result of the closed-stream check over the plan document.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct StreamCheck {
    /// Whether no completed stream contains open checkboxes.
    pub ok: bool,
    /// Completed streams with open checkboxes, in document order.
    pub issues: Vec<StreamIssue>,
}

/// Result of the internal-link check over all `.md` files.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct LinkCheck {
    /// Whether every internal link resolves to an existing path.
    pub ok: bool,
    /// Number of Markdown files whose content was scanned.
    /// Files that could not be read are skipped and not counted.
    pub scanned_files: usize,
    /// Links whose local target does not exist, in scan order.
    pub broken: Vec<BrokenLink>,
}

/// Result of the extension-case check.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ExtensionCheck {
    /// Whether no file carries an uppercase `.MD` extension.
    pub ok: bool,
    /// Files with an uppercase `.MD` extension, sorted by path.
    pub miscased: Vec<PathBuf>,
}

/// Result of a full consistency run.
///
/// CI pipelines should gate on `ok` alone; the per-check results exist for
/// reporting. `ok` is the conjunction of the three check results.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ConsistencyReport {
    /// Whether all three checks passed.
    pub ok: bool,
    /// Closed-stream check over the plan document.
    pub streams: StreamCheck,
    /// Internal-link check over the Markdown tree.
    pub links: LinkCheck,
    /// Extension-case check over the whole tree.
    pub extensions: ExtensionCheck,
}

impl ConsistencyReport {
    /// Total number of findings across all checks.
    #[must_use]
    pub fn findings_count(&self) -> usize {
        self.streams.issues.len() + self.links.broken.len() + self.extensions.miscased.len()
    }
}

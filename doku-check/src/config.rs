//! Configuration for a consistency run.
//!
//! One struct covers the whole tool: where the repository root is, where the
//! plan document lives, and the limits applied to the Markdown walk. Nothing
//! about the repository layout is baked in beyond the plan file name;
//! everything else comes from the caller.

use std::path::PathBuf;

/// File name of the plan document expected at the repository root.
pub const PLAN_FILE_NAME: &str = "PLAN_PHASES.md";

/// Options for a documentation consistency run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Repository root scanned by all checks.
    pub root: PathBuf,
    /// Plan document override. When `None`, the plan is expected at
    /// `<root>/PLAN_FILE_NAME`.
    pub plan: Option<PathBuf>,
    /// Exclude patterns (glob format) for the Markdown walk.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes read during link validation (default: 10 MB).
    /// Oversized files count as unreadable and are skipped.
    pub max_file_size: u64,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`.** Following symlinks lets the walk leave the
    /// repository root and wander into system directories.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested directories.
    pub max_depth: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            plan: None,
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
        }
    }
}

impl CheckConfig {
    /// Effective plan document path for this run.
    #[must_use]
    pub fn plan_path(&self) -> PathBuf {
        self.plan
            .clone()
            .unwrap_or_else(|| self.root.join(PLAN_FILE_NAME))
    }
}

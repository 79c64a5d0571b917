//! # doku-check
//!
//! Consistency checks for Markdown project documentation.
//!
//! Three checks run against a repository tree:
//! 1. **Streams** — plan streams marked as completed must not contain open
//!    checkboxes
//! 2. **Links** — internal Markdown links must point at existing paths
//! 3. **Extensions** — Markdown files must use the lowercase `.md` extension
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use doku_check::CheckConfig;
//!
//! let mut config = CheckConfig::default();
//! config.root = PathBuf::from("my-repo");
//! config.exclude = vec!["CHANGELOG.md".to_owned()];
//!
//! let report = doku_check::check_repo(&config).unwrap();
//! println!("Broken links: {}", report.links.broken.len());
//! println!("OK: {}", report.ok);
//! ```

mod checks;
mod config;
mod error;
pub mod output;
mod report;
mod walk;

pub use checks::extension::check_extension_case;
pub use checks::links::check_internal_links;
pub use checks::streams::{COMPLETED_MARKER, check_closed_streams};
pub use config::{CheckConfig, PLAN_FILE_NAME};
pub use error::PlanDocError;
pub use report::{
    BrokenLink, ConsistencyReport, ExtensionCheck, LinkCheck, StreamCheck, StreamIssue,
};

/// Run all three consistency checks against the configured repository.
///
/// This is the primary public API. The plan document is read first; the link
/// and extension checks then walk the tree rooted at `config.root`.
///
/// # Errors
///
/// Returns [`PlanDocError::Missing`] if the plan document does not exist and
/// [`PlanDocError::Unreadable`] if it exists but cannot be read as UTF-8.
/// Findings are not errors: a run over an inconsistent repository returns
/// `Ok` with `report.ok == false`.
pub fn check_repo(config: &CheckConfig) -> Result<ConsistencyReport, PlanDocError> {
    let plan_path = config.plan_path();

    if !plan_path.exists() {
        return Err(PlanDocError::Missing(plan_path));
    }

    let text = std::fs::read_to_string(&plan_path).map_err(|source| PlanDocError::Unreadable {
        path: plan_path,
        source,
    })?;

    let streams = check_closed_streams(&text);
    let links = check_internal_links(config);
    let extensions = check_extension_case(config);

    let ok = streams.ok && links.ok && extensions.ok;
    Ok(ConsistencyReport {
        ok,
        streams,
        links,
        extensions,
    })
}

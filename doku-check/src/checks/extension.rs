//! Extension-case check.
//!
//! Markdown files must use the lowercase `.md` extension. Tooling that globs
//! for `*.md` silently ignores `.MD` files, so an uppercase extension means a
//! document nobody scans.

use crate::config::CheckConfig;
use crate::report::ExtensionCheck;
use crate::walk;

/// Find files with an uppercase `.MD` extension under the configured root.
///
/// The match is exact: mixed-case extensions such as `.Md` are left alone,
/// the same way a case-sensitive `*.MD` glob would leave them alone.
#[must_use]
pub fn check_extension_case(config: &CheckConfig) -> ExtensionCheck {
    let miscased = walk::files_with_extension(config, "MD");

    ExtensionCheck {
        ok: miscased.is_empty(),
        miscased,
    }
}

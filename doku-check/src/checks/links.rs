//! Internal link check over the Markdown tree.
//!
//! Every `[label](target)` in a `.md` file is resolved relative to the file
//! that contains it. External `http://` and `https://` targets are out of
//! scope, fragments (`#section`) are stripped before resolution, and links
//! that are nothing but a fragment refer to the current file and always
//! resolve. Files that cannot be read are skipped without failing the run.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::CheckConfig;
use crate::report::{BrokenLink, LinkCheck};
use crate::walk;

/// Inline link pattern: `[label](target)`. The label may be empty, the
/// target is everything up to the first closing parenthesis. Image links
/// (`![alt](target)`) match as well and are checked the same way.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\[[^\]]*\]\(([^)]+)\)") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid link regex: {err}"),
    }
});

fn collect_broken_links(file: &Path, text: &str, broken: &mut Vec<BrokenLink>) {
    let Some(dir) = file.parent() else {
        return;
    };

    for target in LINK_PATTERN
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
    {
        let target = target.as_str();

        if target.starts_with("http://") || target.starts_with("https://") {
            continue;
        }

        let local = target.split_once('#').map_or(target, |(path, _)| path);
        if local.is_empty() {
            continue;
        }

        if !dir.join(local).exists() {
            broken.push(BrokenLink {
                file: file.to_owned(),
                target: target.to_owned(),
            });
        }
    }
}

/// Check every internal link in every `.md` file under the configured root.
///
/// A link is broken when its target, with any fragment stripped, does not
/// exist relative to the containing file. Existence is asked of the
/// filesystem; `..` segments are not collapsed lexically, so a target routed
/// through a missing directory does not resolve. Broken links are reported
/// with the target exactly as written, fragment included.
#[must_use]
pub fn check_internal_links(config: &CheckConfig) -> LinkCheck {
    let mut broken = Vec::new();
    let mut scanned_files = 0;

    for file in walk::files_with_extension(config, "md") {
        let Some(text) = walk::read_bounded(&file, config.max_file_size) else {
            continue;
        };
        scanned_files += 1;
        collect_broken_links(&file, &text, &mut broken);
    }

    LinkCheck {
        ok: broken.is_empty(),
        scanned_files,
        broken,
    }
}

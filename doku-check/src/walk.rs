//! Markdown tree traversal.
//!
//! Discovers files on disk and reads them for the check pipeline. Traversal
//! properties:
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Maximum directory depth is enforced to prevent infinite recursion
//! - Entries that cannot be inspected are skipped; a walk error never aborts a run
//! - Bounded streaming reads keep memory use independent of file size

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::CheckConfig;

/// Directories never descended into.
pub const SKIP_DIRS: &[&str] = &[".git", "node_modules", "target"];

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    for pattern in exclude_patterns {
        if pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        {
            return true;
        }
    }
    false
}

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included** (i.e., is NOT a skip dir).
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Compile exclude globs, dropping patterns that do not parse.
fn compile_excludes(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|pat| Pattern::new(pat).ok())
        .collect()
}

/// Find all files under the configured root whose extension matches
/// `extension` exactly (case-sensitive).
///
/// Results are sorted so findings are deterministic across platforms and
/// filesystems. Traversal errors (permission denied, loops) drop the affected
/// entries without failing the run.
#[must_use]
pub fn files_with_extension(config: &CheckConfig, extension: &str) -> Vec<PathBuf> {
    let exclude_patterns = compile_excludes(&config.exclude);
    let mut files = Vec::new();

    for entry in WalkDir::new(&config.root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
        .filter_map(Result::ok)
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        if matches_exclude(path, &exclude_patterns) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    files
}

/// Read a file as UTF-8 using a bounded streaming read.
///
/// Reads at most `max_file_size + 1` bytes so the size check and the read are
/// the same operation. Returns `None` when the file cannot be opened, exceeds
/// `max_file_size`, or is not valid UTF-8 — callers treat `None` as "skip
/// this file".
#[must_use]
pub fn read_bounded(path: &Path, max_file_size: u64) -> Option<String> {
    let file = std::fs::File::open(path).ok()?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .ok()?;

    if buffer.len() as u64 > max_file_size {
        return None;
    }

    String::from_utf8(buffer).ok()
}

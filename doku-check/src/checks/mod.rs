//! The three consistency checks.
//!
//! Each sub-module implements one check and returns its own result type:
//! - `streams` — completed plan streams must have no open checkboxes
//! - `links` — internal Markdown links must point at existing paths
//! - `extension` — Markdown files must use the lowercase `.md` extension

pub mod extension;
pub mod links;
pub mod streams;

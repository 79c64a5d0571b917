//! Closed-stream check over the plan document.
//!
//! The plan document groups work into streams, one `#### ` header per
//! stream. A stream whose header carries the completion marker must not
//! contain open checkboxes — finding one means the plan claims more than
//! the checklist backs up.

use crate::report::{StreamCheck, StreamIssue};

/// Marker a stream header carries once the stream is done.
pub const COMPLETED_MARKER: &str = "\u{2705} ABGESCHLOSSEN";

/// Line prefix that starts a stream section.
const HEADER_PREFIX: &str = "#### ";

/// Line prefix of an open checkbox. Indented checkboxes belong to nested
/// lists and are not counted.
const OPEN_CHECKBOX: &str = "- [ ]";

fn flush(section: Option<StreamIssue>, issues: &mut Vec<StreamIssue>) {
    if let Some(section) = section
        && section.header.contains(COMPLETED_MARKER)
        && section.open_boxes > 0
    {
        issues.push(section);
    }
}

/// Scan plan document content for completed streams with open checkboxes.
///
/// Sections run from one `#### ` header line to the next (or to the end of
/// the document). Text before the first header belongs to no section and is
/// ignored. Reported headers are trimmed but keep their `#### ` prefix, so
/// findings read the same as the document.
#[must_use]
pub fn check_closed_streams(text: &str) -> StreamCheck {
    let mut issues = Vec::new();
    let mut current: Option<StreamIssue> = None;

    for line in text.lines() {
        if line.starts_with(HEADER_PREFIX) {
            flush(current.take(), &mut issues);
            current = Some(StreamIssue {
                header: line.trim().to_owned(),
                open_boxes: 0,
            });
        } else if let Some(section) = current.as_mut()
            && line.starts_with(OPEN_CHECKBOX)
        {
            section.open_boxes += 1;
        }
    }
    flush(current, &mut issues);

    StreamCheck {
        ok: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_passes() {
        let result = check_closed_streams("");
        assert!(result.ok);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_completed_stream_with_open_boxes() {
        let text = "\
#### Stream A: Parser (\u{2705} ABGESCHLOSSEN)
- [x] tokenizer
- [ ] error recovery
- [ ] fuzzing
";
        let result = check_closed_streams(text);
        assert!(!result.ok);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(
            result.issues[0].header,
            "#### Stream A: Parser (\u{2705} ABGESCHLOSSEN)"
        );
        assert_eq!(result.issues[0].open_boxes, 2);
    }

    #[test]
    fn test_completed_stream_without_open_boxes() {
        let text = "\
#### Stream A (\u{2705} ABGESCHLOSSEN)
- [x] done
- [x] also done
";
        let result = check_closed_streams(text);
        assert!(result.ok, "checked boxes must not count: {result:?}");
    }

    #[test]
    fn test_unmarked_stream_may_have_open_boxes() {
        let text = "\
#### Stream B (in Arbeit)
- [ ] still open
- [ ] also open
";
        let result = check_closed_streams(text);
        assert!(result.ok);
    }

    #[test]
    fn test_preamble_checkboxes_ignored() {
        let text = "\
- [ ] floating checkbox before any stream

#### Stream A (\u{2705} ABGESCHLOSSEN)
- [x] done
";
        let result = check_closed_streams(text);
        assert!(result.ok);
    }

    #[test]
    fn test_indented_checkbox_not_counted() {
        let text = "\
#### Stream A (\u{2705} ABGESCHLOSSEN)
- [x] top level
  - [ ] nested item
";
        let result = check_closed_streams(text);
        assert!(result.ok, "indented checkbox counted: {result:?}");
    }

    #[test]
    fn test_section_ends_at_next_header() {
        let text = "\
#### Stream A (\u{2705} ABGESCHLOSSEN)
- [x] done
#### Stream B
- [ ] open but B is not completed
";
        let result = check_closed_streams(text);
        assert!(result.ok);
    }

    #[test]
    fn test_multiple_findings_in_document_order() {
        let text = "\
#### Zweiter Stream (\u{2705} ABGESCHLOSSEN)
- [ ] a
#### Erster Stream (\u{2705} ABGESCHLOSSEN)
- [ ] b
- [ ] c
";
        let result = check_closed_streams(text);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].header.contains("Zweiter"));
        assert_eq!(result.issues[1].open_boxes, 2);
    }

    #[test]
    fn test_header_at_end_of_document() {
        let text = "#### Stream A (\u{2705} ABGESCHLOSSEN)";
        let result = check_closed_streams(text);
        assert!(result.ok);
    }

    #[test]
    fn test_marker_in_body_does_not_complete_stream() {
        let text = "\
#### Stream A
Status: \u{2705} ABGESCHLOSSEN
- [ ] open
";
        let result = check_closed_streams(text);
        assert!(result.ok, "marker must be in the header line: {result:?}");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "#### Stream A (\u{2705} ABGESCHLOSSEN)\r\n- [ ] open\r\n";
        let result = check_closed_streams(text);
        assert!(!result.ok);
        assert_eq!(result.issues[0].open_boxes, 1);
        assert!(
            !result.issues[0].header.ends_with('\r'),
            "header must be trimmed"
        );
    }

    #[test]
    fn test_level_three_headers_do_not_start_sections() {
        let text = "\
### Phase 1 (\u{2705} ABGESCHLOSSEN)
- [ ] open under a level-3 header
";
        let result = check_closed_streams(text);
        assert!(result.ok);
    }
}

//! Marker-delimited README splicing.
//!
//! The section between a start and an end marker is replaced with freshly
//! rendered content. Splicing is purely textual; the document is never parsed
//! as Markdown.

/// Default marker opening the showcase section.
pub const DEFAULT_START_MARKER: &str = "<!-- SHOWCASE-START -->";

/// Default marker closing the showcase section.
pub const DEFAULT_END_MARKER: &str = "<!-- SHOWCASE-END -->";

/// Warning reported when a document has no marker pair.
pub const MARKERS_NOT_FOUND: &str = "Markers not found in README. Appending content to the end.";

/// Where the new content ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The content between the markers was replaced.
    Replaced,
    /// At least one marker was missing, so a new section was appended.
    Appended,
}

/// Result of splicing content into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    /// The updated document.
    pub document: String,

    /// How the content was placed.
    pub placement: Placement,
}

/// Splices `content` into `document` between `start_marker` and `end_marker`.
///
/// Only the first occurrence of each marker is considered, and the two are
/// searched for independently. When both exist, everything strictly between
/// them is replaced by a newline followed by `content`. Otherwise a new marker
/// section holding `content` is appended and the placement is
/// [`Placement::Appended`].
#[must_use]
pub fn splice(document: &str, content: &str, start_marker: &str, end_marker: &str) -> Spliced {
    match (document.find(start_marker), document.find(end_marker)) {
        (Some(start), Some(end)) => {
            let before = &document[..start + start_marker.len()];
            let after = &document[end..];
            Spliced {
                document: format!("{before}\n{content}{after}"),
                placement: Placement::Replaced,
            }
        }
        _ => Spliced {
            document: format!("{document}\n\n{start_marker}\n{content}{end_marker}\n"),
            placement: Placement::Appended,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = "## Projects\n\n- one\n";

    fn splice_default(document: &str, content: &str) -> Spliced {
        splice(document, content, DEFAULT_START_MARKER, DEFAULT_END_MARKER)
    }

    /// Returns the text strictly between the first marker pair.
    fn enclosed(document: &str) -> &str {
        let start = document.find(DEFAULT_START_MARKER).unwrap() + DEFAULT_START_MARKER.len();
        let end = document.find(DEFAULT_END_MARKER).unwrap();
        &document[start..end]
    }

    #[test]
    fn replaces_content_between_markers() {
        let document =
            "# Hi\n\n<!-- SHOWCASE-START -->\nold content\n<!-- SHOWCASE-END -->\n\nBye\n";

        let result = splice_default(document, FRAGMENT);

        assert_eq!(result.placement, Placement::Replaced);
        assert_eq!(
            result.document,
            "# Hi\n\n<!-- SHOWCASE-START -->\n## Projects\n\n- one\n<!-- SHOWCASE-END -->\n\nBye\n"
        );
    }

    #[test]
    fn splicing_twice_is_idempotent() {
        let document = "intro\n<!-- SHOWCASE-START -->\n<!-- SHOWCASE-END -->\noutro\n";

        let once = splice_default(document, FRAGMENT);
        let twice = splice_default(&once.document, FRAGMENT);

        assert_eq!(twice.document, once.document);
        assert_eq!(enclosed(&twice.document), format!("\n{FRAGMENT}"));
    }

    #[test]
    fn does_not_add_newline_before_end_marker() {
        let document = "<!-- SHOWCASE-START --><!-- SHOWCASE-END -->";

        let result = splice_default(document, "inline");

        assert_eq!(
            result.document,
            "<!-- SHOWCASE-START -->\ninline<!-- SHOWCASE-END -->"
        );
    }

    #[test]
    fn appends_when_markers_missing() {
        let document = "# Profile\n";

        let result = splice_default(document, FRAGMENT);

        assert_eq!(result.placement, Placement::Appended);
        assert!(result.document.len() > document.len());
        assert_eq!(
            result.document,
            "# Profile\n\n\n<!-- SHOWCASE-START -->\n## Projects\n\n- one\n<!-- SHOWCASE-END -->\n"
        );
    }

    #[test]
    fn single_marker_counts_as_missing() {
        let only_start = "a\n<!-- SHOWCASE-START -->\nb\n";
        let only_end = "a\n<!-- SHOWCASE-END -->\nb\n";

        for document in [only_start, only_end] {
            let result = splice_default(document, FRAGMENT);
            assert_eq!(result.placement, Placement::Appended);
            assert!(result.document.starts_with(document));
        }
    }

    #[test]
    fn only_first_marker_pair_is_used() {
        let document = "<!-- SHOWCASE-START -->\nfirst\n<!-- SHOWCASE-END -->\n\
                        <!-- SHOWCASE-START -->\nsecond\n<!-- SHOWCASE-END -->\n";

        let result = splice_default(document, "new\n");

        assert_eq!(
            result.document,
            "<!-- SHOWCASE-START -->\nnew\n<!-- SHOWCASE-END -->\n\
             <!-- SHOWCASE-START -->\nsecond\n<!-- SHOWCASE-END -->\n"
        );
    }

    #[test]
    fn supports_custom_markers() {
        let document = "[[begin]]x[[end]]";

        let result = splice(document, "y\n", "[[begin]]", "[[end]]");

        assert_eq!(result.document, "[[begin]]\ny\n[[end]]");
    }
}

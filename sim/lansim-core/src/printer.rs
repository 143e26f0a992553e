//! Document handling of printer nodes.
//!
//! A printer accepts every job that reaches it. Before printing it works out
//! what kind of document it received and who wrote it, so the network can
//! keep accounting records.

use crate::{
    report::{write_best_effort, Report},
    Network, Packet,
};

/// Documents starting with this marker are PostScript.
pub const POSTSCRIPT_MARKER: &str = "!PS";

const AUTHOR_KEYWORD: &str = "author:";
const TITLE_KEYWORD: &str = "title:";
const UNKNOWN_AUTHOR: &str = "Unknown";
const UNTITLED: &str = "Untitled";
const ASCII_TITLE: &str = "ASCII DOCUMENT";

/// Plain text documents carry the author at these character offsets.
const ASCII_AUTHOR_START: usize = 8;
const ASCII_AUTHOR_END: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PostScript,
    Ascii,
}

impl DocumentKind {
    fn delivered_line(self) -> &'static str {
        match self {
            DocumentKind::PostScript => ">>> Postscript job delivered.\n\n",
            DocumentKind::Ascii => ">>> ASCII Print job delivered.\n\n",
        }
    }
}

/// What a printer learned about a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: DocumentKind,
    pub author: String,
    pub title: String,
}

impl Document {
    /// Classifies `message` and extracts its author and title.
    ///
    /// PostScript documents name their author and title with `author:` and
    /// `title:`, each value running up to the next `.`. Both keywords are
    /// looked up from the start of the message, so their order does not
    /// matter. Plain text documents have no title and carry the author in
    /// characters 8 to 16.
    pub fn classify(message: &str) -> Self {
        if message.starts_with(POSTSCRIPT_MARKER) {
            Self {
                kind: DocumentKind::PostScript,
                author: keyword_value(message, AUTHOR_KEYWORD)
                    .unwrap_or(UNKNOWN_AUTHOR)
                    .to_string(),
                title: keyword_value(message, TITLE_KEYWORD)
                    .unwrap_or(UNTITLED)
                    .to_string(),
            }
        } else {
            Self {
                kind: DocumentKind::Ascii,
                author: ascii_author(message).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                title: ASCII_TITLE.to_string(),
            }
        }
    }
}

/// The text following the first `keyword`, up to the next `.` or the end.
fn keyword_value<'a>(message: &'a str, keyword: &str) -> Option<&'a str> {
    let start = message.find(keyword)? + keyword.len();
    let rest = &message[start..];
    let end = rest.find('.').unwrap_or(rest.len());
    Some(&rest[..end])
}

fn ascii_author(message: &str) -> Option<String> {
    if message.chars().count() < ASCII_AUTHOR_END {
        return None;
    }
    Some(
        message
            .chars()
            .skip(ASCII_AUTHOR_START)
            .take(ASCII_AUTHOR_END - ASCII_AUTHOR_START)
            .collect(),
    )
}

/// Prints the document in `packet`. Always succeeds.
pub(crate) fn print_document(network: &Network, packet: &Packet, report: &mut dyn Report) -> bool {
    let document = Document::classify(packet.message());
    network.record_accounting(report, &document.author, &document.title);
    write_best_effort(report, document.kind.delivered_line());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FailingReport, Node};

    fn classify(message: &str) -> (DocumentKind, String, String) {
        let document = Document::classify(message);
        (document.kind, document.author, document.title)
    }

    #[test]
    fn postscript_with_author_and_title() {
        assert_eq!(
            classify("!PS author:Bob.title:Report."),
            (DocumentKind::PostScript, "Bob".into(), "Report".into())
        );
    }

    #[test]
    fn postscript_without_author() {
        assert_eq!(
            classify("!PS title:OnlyTitle."),
            (DocumentKind::PostScript, "Unknown".into(), "OnlyTitle".into())
        );
    }

    #[test]
    fn postscript_marker_only() {
        assert_eq!(
            classify("!PS"),
            (DocumentKind::PostScript, "Unknown".into(), "Untitled".into())
        );
    }

    #[test]
    fn postscript_values_run_to_end_without_period() {
        assert_eq!(
            classify("!PS author:Alice title:Memo"),
            (
                DocumentKind::PostScript,
                "Alice title:Memo".into(),
                "Memo".into()
            )
        );
    }

    #[test]
    fn postscript_keywords_in_any_order() {
        assert_eq!(
            classify("!PS title:Plan.author:Eve."),
            (DocumentKind::PostScript, "Eve".into(), "Plan".into())
        );
    }

    #[test]
    fn postscript_empty_values() {
        assert_eq!(
            classify("!PS author:.title:."),
            (DocumentKind::PostScript, "".into(), "".into())
        );
    }

    #[test]
    fn postscript_marker_must_be_a_prefix() {
        let (kind, _, title) = classify(" !PS author:Bob.");
        assert_eq!(kind, DocumentKind::Ascii);
        assert_eq!(title, "ASCII DOCUMENT");
    }

    #[test]
    fn ascii_long_enough_for_author() {
        assert_eq!(
            classify("Letter: Jonathan writes"),
            (DocumentKind::Ascii, "Jonathan".into(), "ASCII DOCUMENT".into())
        );
        assert_eq!(
            classify("0123456789abcdef"),
            (DocumentKind::Ascii, "89abcdef".into(), "ASCII DOCUMENT".into())
        );
    }

    #[test]
    fn ascii_too_short_for_author() {
        assert_eq!(
            classify("Hello World"),
            (DocumentKind::Ascii, "Unknown".into(), "ASCII DOCUMENT".into())
        );
        assert_eq!(
            classify("0123456789abcde"),
            (DocumentKind::Ascii, "Unknown".into(), "ASCII DOCUMENT".into())
        );
    }

    #[test]
    fn ascii_author_counts_characters() {
        assert_eq!(classify("ééééééééAuthorXY").1, "AuthorXY");
    }

    #[test]
    fn printer_reports_accounting_and_delivery() {
        let network = crate::Network::new();
        let mut report = String::new();
        let packet = Packet::new("!PS author:Bob.title:Report.", "Filip", "Andy");
        assert!(Node::printer("Andy").handle_document(&network, &packet, &mut report));
        assert_eq!(
            report,
            "\tAccounting -- author = 'Bob' -- title = 'Report'\n>>> Postscript job delivered.\n\n"
        );
    }

    #[test]
    fn printer_accepts_even_when_report_fails() {
        let network = crate::Network::new();
        let packet = Packet::new("Hello World", "Filip", "Andy");
        let mut report = FailingReport::default();
        assert!(Node::printer("Andy").handle_document(&network, &packet, &mut report));
        assert_eq!(report.attempts(), 2);
    }
}

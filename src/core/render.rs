//! View models for the two diff presentations.
//!
//! Both functions are pure projections of a segment sequence into display
//! lines.  The UI layer only decides colours and placement.

use unicode_width::UnicodeWidthStr;

use super::diff::{compute_diff, DiffSegment, SegmentKind};

// ───────────────────────────────────────── view mode ─────────

/// Which presentation the diff viewer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ViewMode {
    #[default]
    Split,
    Unified,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Split => ViewMode::Unified,
            ViewMode::Unified => ViewMode::Split,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Split => "Split",
            ViewMode::Unified => "Unified",
        }
    }

    /// Key used in the config file.
    pub fn config_key(self) -> &'static str {
        match self {
            ViewMode::Split => "split",
            ViewMode::Unified => "unified",
        }
    }

    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "split" => Some(ViewMode::Split),
            "unified" => Some(ViewMode::Unified),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── row model ─────────

/// One display line of a rendered diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: SegmentKind,
    pub text: String,
    /// 1-based line number in the original text (`None` for added lines).
    pub old_no: Option<usize>,
    /// 1-based line number in the modified text (`None` for removed lines).
    pub new_no: Option<usize>,
}

impl RenderedLine {
    pub fn prefix(&self) -> &'static str {
        self.kind.marker()
    }
}

/// Left and right columns of the split view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitView {
    /// Unchanged + removed lines.
    pub left: Vec<RenderedLine>,
    /// Unchanged + added lines.
    pub right: Vec<RenderedLine>,
}

/// Prompt shown instead of a diff while both inputs are empty.
pub const PLACEHOLDER: &str = "Type or paste text into both inputs to compare them.";

/// `true` when there is nothing to diff and a placeholder should be shown.
pub fn is_empty_input(original: &str, modified: &str) -> bool {
    original.is_empty() && modified.is_empty()
}

/// Walk every line of every segment, numbering both sides as we go.
fn numbered_lines(segments: &[DiffSegment]) -> Vec<RenderedLine> {
    let mut out = Vec::new();
    let mut old_no = 0usize;
    let mut new_no = 0usize;

    for seg in segments {
        for text in seg.lines() {
            let (old, new) = match seg.kind {
                SegmentKind::Unchanged => {
                    old_no += 1;
                    new_no += 1;
                    (Some(old_no), Some(new_no))
                }
                SegmentKind::Removed => {
                    old_no += 1;
                    (Some(old_no), None)
                }
                SegmentKind::Added => {
                    new_no += 1;
                    (None, Some(new_no))
                }
            };
            out.push(RenderedLine {
                kind: seg.kind,
                text: text.to_string(),
                old_no: old,
                new_no: new,
            });
        }
    }
    out
}

/// Single annotated stream: every line in segment order.
pub fn unified_lines(segments: &[DiffSegment]) -> Vec<RenderedLine> {
    numbered_lines(segments)
}

/// Two filtered columns: added lines never reach the left, removed lines
/// never reach the right.
pub fn split_columns(segments: &[DiffSegment]) -> SplitView {
    let mut view = SplitView::default();
    for line in numbered_lines(segments) {
        if line.kind.in_original() {
            view.left.push(line.clone());
        }
        if line.kind.in_modified() {
            view.right.push(line);
        }
    }
    view
}

// ───────────────────────────────────────── plain text ────────

/// Unified view as plain text, one `marker + line` per row.
pub fn format_unified_text(segments: &[DiffSegment]) -> String {
    let mut out = String::new();
    for line in unified_lines(segments) {
        out.push_str(line.prefix());
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}

/// Split view as plain text: left column padded to a common width, then
/// ` │ `, then the right column.
pub fn format_split_text(segments: &[DiffSegment]) -> String {
    let view = split_columns(segments);
    let cell = |line: &RenderedLine| format!("{}{}", line.prefix(), line.text);
    let left_width = view
        .left
        .iter()
        .map(|l| UnicodeWidthStr::width(cell(l).as_str()))
        .max()
        .unwrap_or(0);

    let rows = view.left.len().max(view.right.len());
    let mut out = String::new();
    for i in 0..rows {
        let left = view.left.get(i).map(cell).unwrap_or_default();
        let right = view.right.get(i).map(cell).unwrap_or_default();
        let pad = left_width.saturating_sub(UnicodeWidthStr::width(left.as_str()));
        out.push_str(&left);
        out.push_str(&" ".repeat(pad));
        out.push_str(" │");
        if !right.is_empty() {
            out.push(' ');
            out.push_str(&right);
        }
        out.push('\n');
    }
    out
}

/// Plain-text diff body for `view`, or the placeholder line when both
/// inputs are empty.
pub fn format_diff_text(original: &str, modified: &str, view: ViewMode) -> String {
    if is_empty_input(original, modified) {
        return format!("{PLACEHOLDER}\n");
    }
    let segments = compute_diff(original, modified);
    match view {
        ViewMode::Unified => format_unified_text(&segments),
        ViewMode::Split => format_split_text(&segments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ORIGINAL: &str = "keep\nold one\nold two\nshared\ntail";
    const MODIFIED: &str = "keep\nnew one\nshared\ntail\nextra\n";

    #[test]
    fn split_columns_never_cross_sides() {
        let pairs = [
            (ORIGINAL, MODIFIED),
            ("", "only added\n"),
            ("only removed\n", ""),
            ("a\nb\n", "b\na\n"),
        ];
        for (o, m) in pairs {
            let view = split_columns(&compute_diff(o, m));
            assert!(view.left.iter().all(|l| l.kind != SegmentKind::Added));
            assert!(view.right.iter().all(|l| l.kind != SegmentKind::Removed));
        }
    }

    #[test]
    fn split_columns_rebuild_each_side() {
        let view = split_columns(&compute_diff(ORIGINAL, MODIFIED));
        let left: Vec<&str> = view.left.iter().map(|l| l.text.as_str()).collect();
        let right: Vec<&str> = view.right.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(left, ORIGINAL.lines().collect::<Vec<_>>());
        assert_eq!(right, MODIFIED.lines().collect::<Vec<_>>());
    }

    #[test]
    fn unified_lines_match_segment_lines_in_order() {
        let segments = compute_diff(ORIGINAL, MODIFIED);
        let expected: Vec<String> = segments
            .iter()
            .flat_map(|s| s.lines().map(str::to_string))
            .collect();

        let text = format_unified_text(&segments);
        let stripped: Vec<String> = text.lines().map(|l| l[2..].to_string()).collect();
        assert_eq!(stripped, expected);
    }

    #[test]
    fn unified_prefixes_follow_kind() {
        let lines = unified_lines(&compute_diff("a\nb\n", "a\nc\n"));
        let prefixes: Vec<&str> = lines.iter().map(|l| l.prefix()).collect();
        assert_eq!(prefixes, vec!["  ", "- ", "+ "]);
    }

    #[test]
    fn line_numbers_track_both_sides() {
        let lines = unified_lines(&compute_diff("a\nb\nc\n", "a\nc\nd\n"));
        let numbers: Vec<(Option<usize>, Option<usize>)> =
            lines.iter().map(|l| (l.old_no, l.new_no)).collect();
        assert_eq!(
            numbers,
            vec![
                (Some(1), Some(1)),
                (Some(2), None),
                (Some(3), Some(2)),
                (None, Some(3)),
            ]
        );
    }

    #[test]
    fn split_text_pads_left_column() {
        let text = format_split_text(&compute_diff("a\n", "bbb\n"));
        assert_eq!(text, "- a │ + bbb\n");
    }

    #[test]
    fn split_text_keeps_trailing_whitespace_on_both_sides() {
        let text = format_split_text(&compute_diff("a  \n", "b  \n"));
        assert_eq!(text, "- a   │ + b  \n");

        let text = format_split_text(&compute_diff("gone\n", ""));
        assert_eq!(text, "- gone │\n");
    }

    #[test]
    fn empty_inputs_print_the_placeholder() {
        for view in [ViewMode::Split, ViewMode::Unified] {
            assert_eq!(format_diff_text("", "", view), format!("{PLACEHOLDER}\n"));
        }
        assert_eq!(format_diff_text("a\n", "a\n", ViewMode::Unified), "  a\n");
    }

    #[test]
    fn empty_input_detection() {
        assert!(is_empty_input("", ""));
        assert!(!is_empty_input("", "x"));
        assert!(!is_empty_input("\n", ""));
    }

    #[test]
    fn view_mode_toggles_and_parses() {
        assert_eq!(ViewMode::Split.toggle(), ViewMode::Unified);
        assert_eq!(ViewMode::Unified.toggle(), ViewMode::Split);
        assert_eq!(ViewMode::from_config_key("Unified"), Some(ViewMode::Unified));
        assert_eq!(ViewMode::from_config_key("sideways"), None);
    }
}

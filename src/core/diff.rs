//! Line-granularity diff between two text snapshots.
//!
//! The engine asks [`similar`] for a Myers edit script over lines and then
//! coalesces consecutive lines of the same kind into [`DiffSegment`]s.  A
//! line keeps its `\n` terminator, so concatenating segment values always
//! reproduces the inputs byte-for-byte.
//!
//! When several minimal edit scripts exist, the one returned is whatever
//! Myers picks.  Callers must not depend on a particular tie-break.

use similar::{Algorithm, ChangeTag, TextDiff};

// ───────────────────────────────────────── types ─────────────

/// Classification of a run of lines relative to the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

impl SegmentKind {
    /// Two-column marker used by the unified view.
    pub fn marker(self) -> &'static str {
        match self {
            SegmentKind::Unchanged => "  ",
            SegmentKind::Added => "+ ",
            SegmentKind::Removed => "- ",
        }
    }

    /// Does this kind belong to the original (left) side?
    pub fn in_original(self) -> bool {
        matches!(self, SegmentKind::Unchanged | SegmentKind::Removed)
    }

    /// Does this kind belong to the modified (right) side?
    pub fn in_modified(self) -> bool {
        matches!(self, SegmentKind::Unchanged | SegmentKind::Added)
    }
}

impl From<ChangeTag> for SegmentKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Delete => SegmentKind::Removed,
        }
    }
}

/// A contiguous run of whole lines sharing one [`SegmentKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    /// Raw text including line terminators.  Never empty.
    pub value: String,
    pub kind: SegmentKind,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// Display lines with terminators stripped.
    ///
    /// `"a\nb\n"` yields `["a", "b"]`; a final line without a terminator
    /// is still a line, so `"a"` yields `["a"]`.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.value.lines()
    }

    pub fn line_count(&self) -> usize {
        self.value.lines().count()
    }
}

/// Line counts per kind for a segment sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added_lines: usize,
    pub removed_lines: usize,
    pub unchanged_lines: usize,
}

impl DiffStats {
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        let mut stats = Self::default();
        for seg in segments {
            let n = seg.line_count();
            match seg.kind {
                SegmentKind::Added => stats.added_lines += n,
                SegmentKind::Removed => stats.removed_lines += n,
                SegmentKind::Unchanged => stats.unchanged_lines += n,
            }
        }
        stats
    }

    pub fn has_changes(&self) -> bool {
        self.added_lines > 0 || self.removed_lines > 0
    }

    /// Compact `+A -R` summary.
    pub fn summary(&self) -> String {
        format!("+{} -{}", self.added_lines, self.removed_lines)
    }
}

// ───────────────────────────────────────── algorithm ─────────

/// Compute the line diff between `original` and `modified`.
///
/// Total over all inputs: two empty strings produce an empty sequence,
/// and no segment is ever empty.
pub fn compute_diff(original: &str, modified: &str) -> Vec<DiffSegment> {
    let old = split_lines(original);
    let new = split_lines(modified);
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(old.as_slice(), new.as_slice());

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = SegmentKind::from(change.tag());
        let value: &str = change.value();
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(value),
            _ => segments.push(DiffSegment::new(kind, value)),
        }
    }
    debug_assert_eq!(reconstruct_original(&segments), original);
    debug_assert_eq!(reconstruct_modified(&segments), modified);
    segments
}

/// Split on `\n` only; a lone `\r` stays inside its line.
fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Rebuild the original text from a segment sequence.
pub fn reconstruct_original(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind.in_original())
        .map(|s| s.value.as_str())
        .collect()
}

/// Rebuild the modified text from a segment sequence.
pub fn reconstruct_modified(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind.in_modified())
        .map(|s| s.value.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_reconstructs(original: &str, modified: &str) {
        let segments = compute_diff(original, modified);
        assert_eq!(reconstruct_original(&segments), original);
        assert_eq!(reconstruct_modified(&segments), modified);
        assert!(segments.iter().all(|s| !s.value.is_empty()));
        // Coalescing leaves no two neighbours with the same kind.
        for pair in segments.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn reconstruction_holds_for_edge_inputs() {
        let cases = [
            ("", ""),
            ("", "x"),
            ("x", ""),
            ("one line", "one line"),
            ("one line", "other line"),
            ("a\n", "a"),
            ("a", "a\n"),
            ("a\nb\nc\n", "a\nc\n"),
            ("a\nb\nc\n", "a\nB\nc\nd\n"),
            ("\n\n\n", "\n"),
            ("héllo\nwörld\n", "héllo\nwelt\n"),
            ("x\r\ny\r\n", "x\r\nz\r\n"),
        ];
        for (original, modified) in cases {
            assert_reconstructs(original, modified);
        }
    }

    #[test]
    fn identical_inputs_are_all_unchanged() {
        let text = "fn main() {\n    println!(\"hi\");\n}\n";
        let segments = compute_diff(text, text);
        assert_eq!(segments, vec![DiffSegment::new(SegmentKind::Unchanged, text)]);
    }

    #[test]
    fn both_empty_yields_nothing() {
        assert!(compute_diff("", "").is_empty());
    }

    #[test]
    fn total_replacement() {
        let segments = compute_diff("A\n", "B\n");
        assert!(segments
            .iter()
            .any(|s| s.kind == SegmentKind::Removed && s.value.contains('A')));
        assert!(segments
            .iter()
            .any(|s| s.kind == SegmentKind::Added && s.value.contains('B')));
        assert!(segments.iter().all(|s| s.kind != SegmentKind::Unchanged));
    }

    #[test]
    fn pure_insertion() {
        assert_eq!(
            compute_diff("", "X\n"),
            vec![DiffSegment::new(SegmentKind::Added, "X\n")]
        );
    }

    #[test]
    fn pure_deletion() {
        assert_eq!(
            compute_diff("X\n", ""),
            vec![DiffSegment::new(SegmentKind::Removed, "X\n")]
        );
    }

    #[test]
    fn trailing_newline_only_difference_is_a_change() {
        let segments = compute_diff("a\nb", "a\nb\n");
        assert_eq!(segments[0], DiffSegment::new(SegmentKind::Unchanged, "a\n"));
        let stats = DiffStats::from_segments(&segments);
        assert_eq!(stats.added_lines, 1);
        assert_eq!(stats.removed_lines, 1);
    }

    #[test]
    fn middle_insertion_keeps_context_segments() {
        let segments = compute_diff("a\nc\n", "a\nb\nc\n");
        assert_eq!(
            segments,
            vec![
                DiffSegment::new(SegmentKind::Unchanged, "a\n"),
                DiffSegment::new(SegmentKind::Added, "b\n"),
                DiffSegment::new(SegmentKind::Unchanged, "c\n"),
            ]
        );
    }

    #[test]
    fn stats_count_lines_not_segments() {
        let segments = compute_diff("a\nb\nc\n", "x\ny\nc\nd");
        let stats = DiffStats::from_segments(&segments);
        assert_eq!(stats.removed_lines, 2);
        assert_eq!(stats.added_lines, 3);
        assert_eq!(stats.unchanged_lines, 1);
        assert_eq!(stats.summary(), "+3 -2");
        assert!(stats.has_changes());
    }

    #[test]
    fn lone_carriage_return_does_not_end_a_line() {
        assert_eq!(
            compute_diff("a\rb", "a\rc"),
            vec![
                DiffSegment::new(SegmentKind::Removed, "a\rb"),
                DiffSegment::new(SegmentKind::Added, "a\rc"),
            ]
        );
        assert_reconstructs("x\ry\n", "x\ry\nz\n");
        assert_reconstructs("\r", "\r\r\n");

        let segments = compute_diff("x\ry\n", "x\ry\nz\n");
        let stats = DiffStats::from_segments(&segments);
        assert_eq!(stats.unchanged_lines, 1);
        assert_eq!(stats.added_lines, 1);
    }

    #[test]
    fn segment_lines_strip_terminators() {
        let seg = DiffSegment::new(SegmentKind::Added, "a\n\nb");
        assert_eq!(seg.lines().collect::<Vec<_>>(), vec!["a", "", "b"]);
        assert_eq!(seg.line_count(), 3);
    }
}

//! Joining wrapped paragraph lines.
//!
//! A single-run line whose source flagged a line wrap continues on the next
//! line. Consecutive single-run lines are collapsed into one logical line
//! until the wrap flag clears or a multi-run line (a table row candidate)
//! is reached.

use crate::layout::policy::LineSegmentationPolicy;
use crate::layout::text_block::Line;

/// Result of a joining pass.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedLines {
    /// Lines after joining
    pub lines: Vec<Line>,
    /// Number of lines absorbed into a preceding line
    pub joins: usize,
}

/// Collapse wrapped paragraph continuations.
///
/// The sequence is rebuilt rather than spliced in place. Each absorbed line
/// contributes `" " + text` to the line above it and hands over its own wrap
/// flag; the absorbed line disappears. Running the pass on its own output
/// joins nothing.
///
/// # Examples
///
/// ```
/// use pdf_structure::layout::{Line, TextItem};
/// use pdf_structure::layout::paragraph::join_paragraphs;
/// use pdf_structure::layout::policy::ReferencePolicy;
///
/// let lines = vec![
///     Line::with_items(50.0, vec![TextItem::new("Hello", 0.0, 30.0, 50.0, 12.0).with_ends_line(true)]),
///     Line::with_items(38.0, vec![TextItem::new("world.", 0.0, 36.0, 38.0, 12.0)]),
/// ];
/// let joined = join_paragraphs(lines, &ReferencePolicy);
/// assert_eq!(joined.lines.len(), 1);
/// assert_eq!(joined.lines[0].texts(), vec!["Hello world."]);
/// ```
pub fn join_paragraphs(lines: Vec<Line>, policy: &dyn LineSegmentationPolicy) -> JoinedLines {
    let mut joined = Vec::with_capacity(lines.len());
    let mut joins = 0;
    let mut remaining = lines.into_iter().peekable();

    while let Some(mut line) = remaining.next() {
        while let Some(next) = remaining.next_if(|next| continues_into(&line, next, policy)) {
            absorb(&mut line, next);
            joins += 1;
        }
        joined.push(line);
    }

    JoinedLines {
        lines: joined,
        joins,
    }
}

/// Whether `next` is a wrapped continuation of `line`.
fn continues_into(line: &Line, next: &Line, policy: &dyn LineSegmentationPolicy) -> bool {
    match (line.single_item(), next.single_item()) {
        (Some(current), Some(candidate)) => {
            current.ends_line && policy.continues_paragraph(current, candidate)
        },
        _ => false,
    }
}

fn absorb(line: &mut Line, next: Line) {
    let (Some(current), Some(continuation)) = (line.items.first_mut(), next.items.into_iter().next())
    else {
        return;
    };
    log::trace!("Joining {:?} onto {:?}", continuation.text, current.text);
    current.text.push(' ');
    current.text.push_str(&continuation.text);
    current.ends_line = continuation.ends_line;
}

use formdom::{Document, NodeId};

use super::markup::Markup;

/// Locate the feedback element for a field input.
///
/// Search order: the next sibling when it is a feedback element, then the
/// first feedback element under the input's parent, then the first one under
/// the enclosing row.
pub fn resolve_feedback(doc: &Document, input: NodeId, markup: &Markup) -> Option<NodeId> {
    let class = markup.feedback_class.as_str();

    if let Some(next) = doc.next_sibling(input)
        && doc.has_class(next, class)
    {
        return Some(next);
    }

    if let Some(parent) = doc.parent(input)
        && let Some(found) = doc.query_class(parent, class)
    {
        log::trace!("feedback for {input} found under parent");
        return Some(found);
    }

    if let Some(row) = doc.closest(input, &markup.row_class)
        && let Some(found) = doc.query_class(row, class)
    {
        log::trace!("feedback for {input} found under row");
        return Some(found);
    }

    None
}

/// The row that carries the invalid marker for a field: the closest
/// `form-row`, or the input's parent when there is none.
pub fn resolve_row(doc: &Document, input: NodeId, markup: &Markup) -> Option<NodeId> {
    doc.closest(input, &markup.row_class)
        .or_else(|| doc.parent(input))
}

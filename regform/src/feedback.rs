//! Per-field error state.

use crate::field::FieldId;
use crate::surface::{FormSurface, Visibility};

/// Mark a field invalid and show `message` in its feedback element.
///
/// Without a feedback element only the markers are applied.
pub fn show_error<S: FormSurface + ?Sized>(surface: &mut S, field: FieldId, message: &str) {
    surface.set_field_invalid(field, true);
    surface.set_row_invalid(field, true);
    surface.set_feedback(field, message, Visibility::Shown);
    log::debug!("field '{field}' invalid: {message}");
}

/// Remove a field's error state and restore its default prompt.
///
/// Idempotent: clearing a field that shows no error changes nothing.
pub fn clear_error<S: FormSurface + ?Sized>(surface: &mut S, field: FieldId) {
    surface.set_field_invalid(field, false);
    surface.set_row_invalid(field, false);
    if let Some(default) = surface.feedback_default(field) {
        surface.set_feedback(field, &default, Visibility::Default);
    }
}

/// Clear every field, in evaluation order.
pub fn clear_all<S: FormSurface + ?Sized>(surface: &mut S) {
    for field in FieldId::ALL {
        clear_error(surface, field);
    }
}

pub fn has_error<S: FormSurface + ?Sized>(surface: &S, field: FieldId) -> bool {
    surface.is_field_invalid(field)
}

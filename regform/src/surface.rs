//! Capability interface between the validator and whatever renders the form.

use crate::field::FieldId;

/// Color category of the aggregate message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    /// No color override.
    #[default]
    Neutral,
    Error,
    Success,
}

/// Visibility of a feedback element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Whatever the stylesheet decides.
    #[default]
    Default,
    /// Forced visible.
    Shown,
}

/// The operations the validator needs from an interactive form.
///
/// Implementations own the fields, their feedback elements, the submit
/// control and the aggregate message line. Every method is infallible:
/// a missing feedback element or row is simply skipped.
pub trait FormSurface {
    // -------------------------------------------------------------------------
    // Field values
    // -------------------------------------------------------------------------

    /// Current raw value of a field.
    fn value(&self, field: FieldId) -> String;

    /// Overwrite a field's value.
    fn set_value(&mut self, field: FieldId, value: &str);

    /// Reset every field to empty.
    fn reset_values(&mut self) {
        for field in FieldId::ALL {
            self.set_value(field, "");
        }
    }

    // -------------------------------------------------------------------------
    // Invalid markers
    // -------------------------------------------------------------------------

    fn set_field_invalid(&mut self, field: FieldId, invalid: bool);

    fn is_field_invalid(&self, field: FieldId) -> bool;

    /// Mark the row containing the field.
    fn set_row_invalid(&mut self, field: FieldId, invalid: bool);

    // -------------------------------------------------------------------------
    // Feedback
    // -------------------------------------------------------------------------

    /// Default text captured at binding time, or `None` when the field has
    /// no feedback element.
    fn feedback_default(&self, field: FieldId) -> Option<String>;

    /// Current feedback text, or `None` without a feedback element.
    fn feedback_text(&self, field: FieldId) -> Option<String>;

    fn set_feedback(&mut self, field: FieldId, text: &str, visibility: Visibility);

    // -------------------------------------------------------------------------
    // Submit control
    // -------------------------------------------------------------------------

    /// Visible label of the submit control.
    fn submit_label(&self) -> String;

    fn set_submit_label(&mut self, label: &str);

    fn set_submit_disabled(&mut self, disabled: bool);

    fn is_submit_disabled(&self) -> bool;

    /// Toggle the "sending" visual marker.
    fn set_submit_sending(&mut self, sending: bool);

    // -------------------------------------------------------------------------
    // Aggregate message
    // -------------------------------------------------------------------------

    fn message(&self) -> String;

    fn set_message(&mut self, text: &str);

    fn set_message_tone(&mut self, tone: Tone);

    /// Announce message changes through a polite live region.
    fn announce_message(&mut self);
}

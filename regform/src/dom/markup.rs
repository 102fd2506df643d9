use formdom::Element;

use crate::field::FieldId;
use crate::surface::Tone;

/// Ids, marker classes and attribute names used by [`DomForm`](super::DomForm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub form_id: String,
    /// Preferred submit control id. Falls back to the first
    /// `button[type=submit]` inside the form.
    pub submit_id: String,
    pub message_id: String,
    /// Class on a field's row container.
    pub row_class: String,
    /// Class on feedback elements.
    pub feedback_class: String,
    /// Class added to an invalid field.
    pub field_invalid_class: String,
    /// Class added to an invalid row.
    pub row_invalid_class: String,
    /// Class added to the submit control while sending.
    pub sending_class: String,
    /// Class of the label span inside the submit control.
    pub label_class: String,
    /// Attribute holding a feedback element's default text.
    pub default_attr: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            form_id: "regForm".into(),
            submit_id: "submitBtn".into(),
            message_id: "formMessage".into(),
            row_class: "form-row".into(),
            feedback_class: "invalid-feedback".into(),
            field_invalid_class: "is-invalid".into(),
            row_invalid_class: "invalid".into(),
            sending_class: "sending".into(),
            label_class: "btn-text".into(),
            default_attr: "data-default".into(),
        }
    }
}

/// Colors applied to the aggregate message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub error: String,
    pub success: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            error: "#dc2626".into(),
            success: "#16a34a".into(),
        }
    }
}

impl Palette {
    /// Inline color for a tone; `None` clears the override.
    pub fn color(&self, tone: Tone) -> Option<&str> {
        match tone {
            Tone::Neutral => None,
            Tone::Error => Some(&self.error),
            Tone::Success => Some(&self.success),
        }
    }
}

/// The stock registration page.
///
/// Each field sits in a `form-row` with a label, the input and a feedback
/// span carrying a helpful default prompt.
pub fn registration_markup() -> Element {
    let markup = Markup::default();

    let row = |field: FieldId, kind: &str, prompt: &str| {
        Element::div()
            .class(&markup.row_class)
            .child(Element::label(field.label()).attr("for", field.element_id()))
            .child(Element::input(field.element_id()).attr("type", kind))
            .child(Element::span().class(&markup.feedback_class).text(prompt))
    };

    Element::form(&markup.form_id)
        .child(row(FieldId::FullName, "text", "Enter your first and last name."))
        .child(row(FieldId::Email, "email", "We'll never share your email."))
        .child(row(FieldId::Phone, "tel", "10 digits, no spaces."))
        .child(row(FieldId::Password, "password", "At least 8 characters."))
        .child(row(FieldId::ConfirmPassword, "password", "Re-enter your password."))
        .child(
            Element::submit_button().id(&markup.submit_id).child(
                Element::span()
                    .class(&markup.label_class)
                    .text("Create account"),
            ),
        )
        .child(Element::div().id(&markup.message_id))
}

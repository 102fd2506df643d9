//! [`FormSurface`] over a mounted [`formdom::Document`].

mod markup;
mod resolve;

pub use markup::{Markup, Palette, registration_markup};
pub use resolve::{resolve_feedback, resolve_row};

use std::collections::BTreeMap;

use formdom::{Document, NodeId};

use crate::error::BindError;
use crate::field::FieldId;
use crate::surface::{FormSurface, Tone, Visibility};

/// Nodes resolved for one field at binding time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNodes {
    pub input: NodeId,
    pub row: Option<NodeId>,
    pub feedback: Option<NodeId>,
}

/// A registration form bound to markup.
///
/// Every lookup happens once in [`bind`](Self::bind); afterwards the form
/// only touches the nodes it resolved there.
#[derive(Debug, Clone)]
pub struct DomForm {
    doc: Document,
    markup: Markup,
    palette: Palette,
    fields: BTreeMap<FieldId, FieldNodes>,
    submit: NodeId,
    /// Node whose text is the submit control's visible label.
    submit_label: NodeId,
    message: NodeId,
}

impl DomForm {
    /// Bind with the default markup conventions and palette.
    pub fn bind(doc: Document) -> Result<Self, BindError> {
        Self::bind_with(doc, Markup::default(), Palette::default())
    }

    /// Bind with custom markup conventions.
    pub fn bind_with(mut doc: Document, markup: Markup, palette: Palette) -> Result<Self, BindError> {
        let form = doc
            .get_element_by_id(&markup.form_id)
            .ok_or_else(|| BindError::MissingElement(markup.form_id.clone()))?;

        let mut fields = BTreeMap::new();
        for field in FieldId::ALL {
            let input = doc
                .get_element_by_id(field.element_id())
                .ok_or_else(|| BindError::MissingElement(field.element_id().to_string()))?;
            let feedback = resolve_feedback(&doc, input, &markup);
            if feedback.is_none() {
                log::debug!("field '{field}' has no feedback element");
            }
            let row = resolve_row(&doc, input, &markup);
            fields.insert(
                field,
                FieldNodes {
                    input,
                    row,
                    feedback,
                },
            );
        }

        // Default prompts are captured before anything mutates them.
        for nodes in fields.values() {
            if let Some(fb) = nodes.feedback
                && !doc.has_attribute(fb, &markup.default_attr)
            {
                let text = doc.text_content(fb).trim().to_string();
                doc.set_attribute(fb, &markup.default_attr, text);
            }
        }

        let submit = doc
            .get_element_by_id(&markup.submit_id)
            .or_else(|| {
                doc.query(form, |d, n| {
                    d.tag(n) == "button" && d.attribute(n, "type") == Some("submit")
                })
            })
            .ok_or_else(|| BindError::MissingElement(markup.submit_id.clone()))?;
        let submit_label = doc.query_class(submit, &markup.label_class).unwrap_or(submit);

        let message = doc
            .get_element_by_id(&markup.message_id)
            .ok_or_else(|| BindError::MissingElement(markup.message_id.clone()))?;

        log::trace!("bound registration form (submit {submit}, message {message})");

        Ok(Self {
            doc,
            markup,
            palette,
            fields,
            submit,
            submit_label,
            message,
        })
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// Nodes resolved for a field.
    pub fn field_nodes(&self, field: FieldId) -> FieldNodes {
        // bind() resolves every field, so the lookup always succeeds.
        self.fields[&field]
    }

    pub fn submit_node(&self) -> NodeId {
        self.submit
    }

    pub fn message_node(&self) -> NodeId {
        self.message
    }

    /// Whether the row of a field carries the invalid marker.
    pub fn is_row_invalid(&self, field: FieldId) -> bool {
        self.field_nodes(field)
            .row
            .is_some_and(|row| self.doc.has_class(row, &self.markup.row_invalid_class))
    }

    /// Forced visibility of a field's feedback element.
    pub fn feedback_visibility(&self, field: FieldId) -> Option<Visibility> {
        let fb = self.field_nodes(field).feedback?;
        Some(match self.doc.style(fb).display {
            Some(_) => Visibility::Shown,
            None => Visibility::Default,
        })
    }

    pub fn is_submit_sending(&self) -> bool {
        self.doc.has_class(self.submit, &self.markup.sending_class)
    }

    /// Inline color of the aggregate message.
    pub fn message_color(&self) -> Option<&str> {
        self.doc.style(self.message).color.as_deref()
    }

    /// The aggregate message's live-region setting.
    pub fn message_live(&self) -> Option<&str> {
        self.doc.attribute(self.message, "aria-live")
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.doc.add_class(node, class);
        } else {
            self.doc.remove_class(node, class);
        }
    }
}

impl FormSurface for DomForm {
    fn value(&self, field: FieldId) -> String {
        self.doc.value(self.field_nodes(field).input).to_string()
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        let input = self.field_nodes(field).input;
        self.doc.set_value(input, value);
    }

    fn set_field_invalid(&mut self, field: FieldId, invalid: bool) {
        let input = self.field_nodes(field).input;
        let class = self.markup.field_invalid_class.clone();
        self.toggle_class(input, &class, invalid);
    }

    fn is_field_invalid(&self, field: FieldId) -> bool {
        self.doc
            .has_class(self.field_nodes(field).input, &self.markup.field_invalid_class)
    }

    fn set_row_invalid(&mut self, field: FieldId, invalid: bool) {
        if let Some(row) = self.field_nodes(field).row {
            let class = self.markup.row_invalid_class.clone();
            self.toggle_class(row, &class, invalid);
        }
    }

    fn feedback_default(&self, field: FieldId) -> Option<String> {
        let fb = self.field_nodes(field).feedback?;
        Some(
            self.doc
                .attribute(fb, &self.markup.default_attr)
                .unwrap_or_default()
                .to_string(),
        )
    }

    fn feedback_text(&self, field: FieldId) -> Option<String> {
        let fb = self.field_nodes(field).feedback?;
        Some(self.doc.text_content(fb))
    }

    fn set_feedback(&mut self, field: FieldId, text: &str, visibility: Visibility) {
        let Some(fb) = self.field_nodes(field).feedback else {
            return;
        };
        self.doc.set_text_content(fb, text);
        self.doc.style_mut(fb).display = match visibility {
            Visibility::Shown => Some("block".to_string()),
            Visibility::Default => None,
        };
    }

    fn submit_label(&self) -> String {
        self.doc.text_content(self.submit_label)
    }

    fn set_submit_label(&mut self, label: &str) {
        self.doc.set_text_content(self.submit_label, label);
    }

    fn set_submit_disabled(&mut self, disabled: bool) {
        if disabled {
            self.doc.set_attribute(self.submit, "disabled", "true");
        } else {
            self.doc.remove_attribute(self.submit, "disabled");
        }
    }

    fn is_submit_disabled(&self) -> bool {
        self.doc.has_attribute(self.submit, "disabled")
    }

    fn set_submit_sending(&mut self, sending: bool) {
        let class = self.markup.sending_class.clone();
        self.toggle_class(self.submit, &class, sending);
    }

    fn message(&self) -> String {
        self.doc.text_content(self.message)
    }

    fn set_message(&mut self, text: &str) {
        self.doc.set_text_content(self.message, text);
    }

    fn set_message_tone(&mut self, tone: Tone) {
        let color = self.palette.color(tone).map(str::to_string);
        self.doc.style_mut(self.message).color = color;
    }

    fn announce_message(&mut self) {
        self.doc.set_attribute(self.message, "aria-live", "polite");
    }
}

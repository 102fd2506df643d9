use formdom::{Document, Element, Style};
use regform::dom::{DomForm, Markup, registration_markup, resolve_feedback, resolve_row};
use regform::feedback::{clear_all, clear_error, has_error, show_error};
use regform::{BindError, FieldId, FormSurface, Tone, Visibility};

fn bound() -> DomForm {
    DomForm::bind(Document::new(registration_markup())).unwrap()
}

/// Registration form whose phone row is built by `phone_row`.
fn form_with_phone_row(phone_row: Element) -> Document {
    let plain_row = |field: FieldId| {
        Element::div()
            .class("form-row")
            .child(Element::input(field.element_id()))
            .child(Element::span().class("invalid-feedback").text("hint"))
    };

    Document::new(
        Element::form("regForm")
            .child(plain_row(FieldId::FullName))
            .child(plain_row(FieldId::Email))
            .child(phone_row)
            .child(plain_row(FieldId::Password))
            .child(plain_row(FieldId::ConfirmPassword))
            .child(Element::submit_button().text("Register"))
            .child(Element::div().id("formMessage")),
    )
}

// ============================================================================
// Feedback resolution
// ============================================================================

#[test]
fn test_resolve_prefers_next_sibling() {
    let doc = Document::new(
        Element::div()
            .class("form-row")
            .child(Element::span().id("row-fb").class("invalid-feedback"))
            .child(Element::input("phone"))
            .child(Element::span().id("sibling-fb").class("invalid-feedback")),
    );
    let input = doc.get_element_by_id("phone").unwrap();
    let found = resolve_feedback(&doc, input, &Markup::default()).unwrap();
    assert_eq!(doc.element_id(found), Some("sibling-fb"));
}

#[test]
fn test_resolve_ignores_unmarked_sibling() {
    let doc = Document::new(
        Element::div()
            .class("form-row")
            .child(Element::input("phone"))
            .child(Element::span().id("help").text("not feedback"))
            .child(Element::span().id("fb").class("invalid-feedback")),
    );
    let input = doc.get_element_by_id("phone").unwrap();
    let found = resolve_feedback(&doc, input, &Markup::default()).unwrap();
    assert_eq!(doc.element_id(found), Some("fb"));
}

#[test]
fn test_resolve_falls_back_to_row() {
    let doc = Document::new(
        Element::div()
            .class("form-row")
            .id("row")
            .child(Element::div().id("wrapper").child(Element::input("phone")))
            .child(Element::span().id("fb").class("invalid-feedback")),
    );
    let input = doc.get_element_by_id("phone").unwrap();
    let markup = Markup::default();

    let found = resolve_feedback(&doc, input, &markup).unwrap();
    assert_eq!(doc.element_id(found), Some("fb"));

    let row = resolve_row(&doc, input, &markup).unwrap();
    assert_eq!(doc.element_id(row), Some("row"));
}

#[test]
fn test_resolve_parent_before_row() {
    let wrapped = |wrapper_feedback: bool| {
        let mut wrapper = Element::div()
            .id("wrapper")
            .child(Element::input("phone"))
            .child(Element::span().id("help").text("not feedback"));
        if wrapper_feedback {
            wrapper = wrapper.child(Element::span().id("wrapper-fb").class("invalid-feedback"));
        }
        Document::new(
            Element::div()
                .class("form-row")
                .child(Element::span().id("row-fb").class("invalid-feedback"))
                .child(wrapper),
        )
    };
    let markup = Markup::default();

    let doc = wrapped(true);
    let input = doc.get_element_by_id("phone").unwrap();
    let found = resolve_feedback(&doc, input, &markup).unwrap();
    assert_eq!(doc.element_id(found), Some("wrapper-fb"));

    let doc = wrapped(false);
    let input = doc.get_element_by_id("phone").unwrap();
    let found = resolve_feedback(&doc, input, &markup).unwrap();
    assert_eq!(doc.element_id(found), Some("row-fb"));
}

#[test]
fn test_resolve_none_when_absent() {
    let doc = Document::new(
        Element::div()
            .class("form-row")
            .child(Element::input("phone")),
    );
    let input = doc.get_element_by_id("phone").unwrap();
    assert_eq!(resolve_feedback(&doc, input, &Markup::default()), None);
}

#[test]
fn test_row_falls_back_to_parent() {
    let doc = Document::new(Element::div().id("plain").child(Element::input("phone")));
    let input = doc.get_element_by_id("phone").unwrap();
    let row = resolve_row(&doc, input, &Markup::default()).unwrap();
    assert_eq!(doc.element_id(row), Some("plain"));
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_bind_captures_trimmed_default() {
    let form = bound();
    assert_eq!(
        form.feedback_default(FieldId::Phone).as_deref(),
        Some("10 digits, no spaces.")
    );

    let doc = form_with_phone_row(
        Element::div()
            .class("form-row")
            .child(Element::input("phone"))
            .child(Element::span().class("invalid-feedback").text("   padded prompt \n")),
    );
    let form = DomForm::bind(doc).unwrap();
    assert_eq!(
        form.feedback_default(FieldId::Phone).as_deref(),
        Some("padded prompt")
    );
}

#[test]
fn test_bind_keeps_existing_default_attribute() {
    let doc = form_with_phone_row(
        Element::div()
            .class("form-row")
            .child(Element::input("phone"))
            .child(
                Element::span()
                    .class("invalid-feedback")
                    .attr("data-default", "from markup")
                    .text("stale text"),
            ),
    );
    let mut form = DomForm::bind(doc).unwrap();
    assert_eq!(form.feedback_default(FieldId::Phone).as_deref(), Some("from markup"));

    show_error(&mut form, FieldId::Phone, "bad");
    clear_error(&mut form, FieldId::Phone);
    assert_eq!(form.feedback_text(FieldId::Phone).as_deref(), Some("from markup"));
}

#[test]
fn test_bind_missing_field() {
    let doc = Document::new(
        Element::form("regForm")
            .child(Element::input("fullName"))
            .child(Element::div().id("formMessage")),
    );
    assert_eq!(
        DomForm::bind(doc).unwrap_err(),
        BindError::MissingElement("email".to_string())
    );
}

#[test]
fn test_bind_missing_form() {
    let doc = Document::new(Element::div().child(Element::input("fullName")));
    assert_eq!(
        DomForm::bind(doc).unwrap_err(),
        BindError::MissingElement("regForm".to_string())
    );
}

#[test]
fn test_bind_submit_fallback() {
    let doc = form_with_phone_row(
        Element::div()
            .class("form-row")
            .child(Element::input("phone")),
    );
    let form = DomForm::bind(doc).unwrap();
    let submit = form.submit_node();
    assert_eq!(form.document().tag(submit), "button");
    assert_eq!(form.submit_label(), "Register");
}

// ============================================================================
// Error state
// ============================================================================

#[test]
fn test_show_error_marks_field_row_and_feedback() {
    let mut form = bound();
    show_error(&mut form, FieldId::Email, "Email address is required.");

    assert!(has_error(&form, FieldId::Email));
    assert!(form.is_row_invalid(FieldId::Email));
    assert_eq!(
        form.feedback_text(FieldId::Email).as_deref(),
        Some("Email address is required.")
    );
    assert_eq!(form.feedback_visibility(FieldId::Email), Some(Visibility::Shown));
    assert!(!has_error(&form, FieldId::Phone));
}

#[test]
fn test_clear_error_restores_default() {
    let mut form = bound();
    show_error(&mut form, FieldId::Email, "nope");
    clear_error(&mut form, FieldId::Email);

    assert!(!has_error(&form, FieldId::Email));
    assert!(!form.is_row_invalid(FieldId::Email));
    assert_eq!(
        form.feedback_text(FieldId::Email).as_deref(),
        Some("We'll never share your email.")
    );
    assert_eq!(form.feedback_visibility(FieldId::Email), Some(Visibility::Default));
}

#[test]
fn test_clear_error_is_idempotent() {
    let mut form = bound();
    let before = form.document().clone();

    clear_error(&mut form, FieldId::Password);
    clear_error(&mut form, FieldId::Password);

    let nodes = form.field_nodes(FieldId::Password);
    let fb = nodes.feedback.unwrap();
    assert_eq!(form.document().text_content(fb), before.text_content(fb));
    assert_eq!(form.document().classes(nodes.input), before.classes(nodes.input));
    assert_eq!(form.document().style(fb), before.style(fb));
    assert_eq!(form.document().classes(nodes.row.unwrap()), before.classes(nodes.row.unwrap()));
}

#[test]
fn test_missing_feedback_still_marks_field() {
    let doc = form_with_phone_row(
        Element::div()
            .class("form-row")
            .child(Element::input("phone")),
    );
    let mut form = DomForm::bind(doc).unwrap();

    show_error(&mut form, FieldId::Phone, "Phone number is required.");
    assert!(has_error(&form, FieldId::Phone));
    assert!(form.is_row_invalid(FieldId::Phone));
    assert_eq!(form.feedback_text(FieldId::Phone), None);

    clear_error(&mut form, FieldId::Phone);
    assert!(!has_error(&form, FieldId::Phone));
}

#[test]
fn test_clear_all() {
    let mut form = bound();
    for field in FieldId::ALL {
        show_error(&mut form, field, "bad");
    }
    clear_all(&mut form);
    assert!(FieldId::ALL.iter().all(|&f| !has_error(&form, f)));
}

// ============================================================================
// Aggregate message and submit control
// ============================================================================

#[test]
fn test_message_tone_and_announcement() {
    let mut form = bound();
    form.set_message("Please fill the highlighted fields and try again.");
    form.set_message_tone(Tone::Error);
    form.announce_message();

    assert_eq!(form.message(), "Please fill the highlighted fields and try again.");
    assert_eq!(form.message_color(), Some("#dc2626"));
    assert_eq!(form.message_live(), Some("polite"));

    form.set_message_tone(Tone::Success);
    assert_eq!(form.message_color(), Some("#16a34a"));
    form.set_message_tone(Tone::Neutral);
    assert_eq!(form.message_color(), None);
    assert_eq!(form.document().style(form.message_node()), &Style::new());
}

#[test]
fn test_submit_label_swaps_inner_span() {
    let mut form = bound();
    assert_eq!(form.submit_label(), "Create account");

    form.set_submit_label("Sending…");
    form.set_submit_disabled(true);
    form.set_submit_sending(true);

    let doc = form.document();
    let submit = form.submit_node();
    assert!(doc.query_class(submit, "btn-text").is_some());
    assert_eq!(doc.text_content(submit), "Sending…");
    assert!(form.is_submit_disabled());
    assert!(form.is_submit_sending());
}

use std::collections::BTreeMap;

use crate::style::Style;

/// Owned markup node used to describe a tree before it is mounted.
///
/// `Element` is a plain builder: nothing here tracks parents or siblings.
/// Mount the tree with [`Document::new`](crate::Document::new) to get
/// navigation and mutation.
///
/// # Example
///
/// ```
/// use formdom::Element;
///
/// let row = Element::div()
///     .class("form-row")
///     .child(Element::input("email").attr("type", "email"))
///     .child(Element::span().class("invalid-feedback").text("We never share it"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Own text, rendered before any children.
    pub text: String,
    /// Current value for form controls.
    pub value: String,
    pub style: Style,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new("label").text(text)
    }

    /// Create a form with the given id.
    pub fn form(id: impl Into<String>) -> Self {
        Self::new("form").id(id)
    }

    /// Create an input with the given id and a matching `name` attribute.
    pub fn input(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new("input").attr("name", id.clone()).id(id)
    }

    /// Create a `type="submit"` button.
    pub fn submit_button() -> Self {
        Self::new("button").attr("type", "submit")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}

use serde::Serialize;

/// One of the fields tracked by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Every field, in evaluation order.
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Default markup id of the field's input.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
        }
    }

    /// Whether snapshots trim surrounding whitespace from this field.
    ///
    /// Secrets are compared byte for byte and never normalized.
    pub fn is_trimmed(self) -> bool {
        !matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}

use serde::Serialize;

use crate::field::FieldId;
use crate::surface::FormSurface;

/// Snapshot of the form taken at the start of a submit.
///
/// Name, email and phone are trimmed; secrets are kept as typed. The
/// confirmation is only needed for validation and never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl FormValues {
    /// Read every field from the surface, normalizing per field.
    pub fn snapshot<S: FormSurface + ?Sized>(surface: &S) -> Self {
        let mut values = Self::default();
        for field in FieldId::ALL {
            values.set(field, surface.value(field));
        }
        values
    }

    /// Store a raw value, trimming it when the field calls for it.
    pub fn set(&mut self, field: FieldId, raw: impl Into<String>) {
        let raw = raw.into();
        let value = if field.is_trimmed() {
            raw.trim().to_string()
        } else {
            raw
        };
        *self.slot_mut(field) = value;
    }

    pub fn with(mut self, field: FieldId, raw: impl Into<String>) -> Self {
        self.set(field, raw);
        self
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_trims_identity_fields_only() {
        let values = FormValues::default()
            .with(FieldId::FullName, "  Jane Doe ")
            .with(FieldId::Email, " jane@doe.com\t")
            .with(FieldId::Phone, " 5551234567 ")
            .with(FieldId::Password, " secret pw ")
            .with(FieldId::ConfirmPassword, " secret pw ");

        assert_eq!(values.get(FieldId::FullName), "Jane Doe");
        assert_eq!(values.get(FieldId::Email), "jane@doe.com");
        assert_eq!(values.get(FieldId::Phone), "5551234567");
        assert_eq!(values.get(FieldId::Password), " secret pw ");
        assert_eq!(values.get(FieldId::ConfirmPassword), " secret pw ");
    }

    #[test]
    fn test_serialize_omits_confirmation() {
        let values = FormValues::default()
            .with(FieldId::FullName, "Jane Doe")
            .with(FieldId::Password, "Secur3Tok#")
            .with(FieldId::ConfirmPassword, "Secur3Tok#");

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["password"], "Secur3Tok#");
        assert!(json.get("confirmPassword").is_none());
    }
}

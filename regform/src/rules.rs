//! Registration rules.
//!
//! The predicates here are pure; [`registration_rules`] wires them into a
//! [`Validator`] using the messages and thresholds of a [`FormConfig`].

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{FormConfig, PasswordPolicy};
use crate::field::FieldId;
use crate::validation::Validator;

/// `local@domain.tld`, where no part contains `@` or whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

/// Exactly ten ASCII digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

/// Empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Ten digits that are not the placeholder `sentinel`.
pub fn is_valid_phone(phone: &str, sentinel: &str) -> bool {
    PHONE_RE.is_match(phone) && phone != sentinel
}

/// Whether `password` contains the forbidden word, a name token, or the
/// email's local part. All comparisons are case-insensitive.
pub fn contains_restricted(
    password: &str,
    full_name: &str,
    email: &str,
    policy: &PasswordPolicy,
) -> bool {
    let lower = password.to_lowercase();
    let long_enough = |s: &str| s.chars().count() >= policy.min_identity_len;

    if lower.contains(&policy.forbidden_word.to_lowercase()) {
        return true;
    }

    let name = full_name.to_lowercase();
    if name
        .split_whitespace()
        .filter(|token| long_enough(token))
        .any(|token| lower.contains(token))
    {
        return true;
    }

    if let Some((local, _)) = email.split_once('@') {
        let local = local.to_lowercase();
        if long_enough(&local) && lower.contains(&local) {
            return true;
        }
    }

    false
}

/// Build the registration rule set.
pub fn registration_rules(config: &FormConfig) -> Validator {
    let msg = &config.messages;
    let sentinel = config.phone_sentinel.clone();
    let policy = config.password.clone();

    Validator::new()
        .field(FieldId::FullName)
        .required(&msg.full_name_required)
        .field(FieldId::Email)
        .required(&msg.email_required)
        .rule(|v, _| is_valid_email(v), &msg.email_invalid)
        .field(FieldId::Phone)
        .required(&msg.phone_required)
        .rule(move |v, _| is_valid_phone(v, &sentinel), &msg.phone_invalid)
        .field(FieldId::Password)
        .required(&msg.password_required)
        .min_length(policy.min_length, &msg.password_too_short)
        .rule(
            move |v, values| !contains_restricted(v, &values.full_name, &values.email, &policy),
            &msg.password_restricted,
        )
        .field(FieldId::ConfirmPassword)
        .required(&msg.confirm_required)
        .equals_field(FieldId::Password, &msg.confirm_mismatch)
        .build()
}

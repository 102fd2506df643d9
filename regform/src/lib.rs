//! Registration form validation with a simulated asynchronous submission.
//!
//! [`FormValidator`] owns a [`FormSurface`] (normally a [`dom::DomForm`]
//! bound to markup), checks the five registration fields on every submit,
//! renders per-field feedback, and drives the
//! [`SubmissionState`] lifecycle through a pluggable [`submit::Submitter`].

pub mod config;
pub mod dom;
pub mod error;
pub mod feedback;
pub mod field;
pub mod lifecycle;
pub mod rules;
pub mod submit;
pub mod surface;
pub mod validation;
pub mod validator;
pub mod values;

pub use config::{FormConfig, Messages, PasswordPolicy};
pub use error::{BindError, SendError, SubmitError, TransitionError};
pub use field::FieldId;
pub use lifecycle::SubmissionState;
pub use surface::{FormSurface, Tone, Visibility};
pub use validator::{FormValidator, SubmitOutcome};
pub use values::FormValues;

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::dom::{DomForm, registration_markup};
    pub use crate::field::FieldId;
    pub use crate::lifecycle::SubmissionState;
    pub use crate::surface::FormSurface;
    pub use crate::validator::{FormValidator, SubmitOutcome};
}

//! Rule-based validation over form snapshots.
//!
//! A [`Validator`] is assembled once with a fluent builder and then run
//! against a fresh [`FormValues`](crate::FormValues) on every submit.
//!
//! # Example
//!
//! ```
//! use regform::{FieldId, FormValues};
//! use regform::validation::Validator;
//!
//! let validator = Validator::new()
//!     .field(FieldId::FullName)
//!         .required("Full name is required.")
//!     .field(FieldId::Password)
//!         .required("Password is required.")
//!         .min_length(8, "Password must be at least 8 characters.")
//!     .build();
//!
//! let values = FormValues::default().with(FieldId::Password, "short");
//! let result = validator.validate(&values);
//! assert_eq!(result.errors().len(), 2);
//! ```

mod result;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validator::{FieldBuilder, Validator};

//! Email-format validation collaborator.

use validator::ValidateEmail;

use crate::error::Result;

/// Decides whether a string is a well-formed email address.
///
/// Injected into the signup controller at construction; any error returned
/// here collapses to a `500` envelope at the controller boundary.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool>;
}

/// [`EmailValidator`] backed by the `validator` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}

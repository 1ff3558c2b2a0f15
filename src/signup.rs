//! Signup request validation controller.

use std::sync::Arc;

use serde::Deserialize;

use crate::account::{AddAccount, NewAccount};
use crate::email::EmailValidator;
use crate::http::{HttpResponse, RequestError, bad_request, ok, server_error};

/// Required fields, checked in this exact order.
///
/// The first missing field in this order is the one reported, so the
/// order is part of the public contract.
const REQUIRED_FIELDS: [&str; 4] =
    ["email", "name", "password", "passwordConfirmation"];

/// Raw signup submission.
///
/// Every field is optional at this level; deciding what is missing is the
/// controller's job, not the deserializer's.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

/// One signup attempt, alive for a single `handle` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupRequest {
    pub body: SignupBody,
}

impl From<SignupBody> for SignupRequest {
    fn from(body: SignupBody) -> Self {
        Self { body }
    }
}

/// Validates signup requests and delegates account creation.
///
/// Collaborators are injected at construction so they can be substituted
/// without touching the controller.
#[derive(Clone)]
pub struct SignupController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

/// Absent and empty string both count as missing.
fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

impl SignupController {
    /// Create a new [`SignupController`] with its collaborators.
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    /// Run the validation sequence and map the outcome to an envelope.
    ///
    /// Exactly one of five terminal outcomes: one `MissingParam`, two
    /// `InvalidParam` kinds, `ServerError`, or `200` with the created
    /// account. Collaborator failures never cross this boundary.
    pub async fn handle(&self, request: SignupRequest) -> HttpResponse {
        let body = &request.body;
        let values = [
            &body.email,
            &body.name,
            &body.password,
            &body.password_confirmation,
        ];
        for (field, value) in REQUIRED_FIELDS.into_iter().zip(values) {
            if is_missing(value) {
                return bad_request(RequestError::missing(field));
            }
        }

        let SignupBody {
            name: Some(name),
            email: Some(email),
            password: Some(password),
            password_confirmation: Some(password_confirmation),
        } = request.body
        else {
            // Unreachable: the loop above rejected missing fields.
            return server_error();
        };

        if password != password_confirmation {
            return bad_request(RequestError::invalid("passwordConfirmation"));
        }

        match self.email_validator.is_valid(&email) {
            Ok(true) => {},
            Ok(false) => return bad_request(RequestError::invalid("email")),
            Err(err) => {
                tracing::error!(error = %err, "email validator failed");
                return server_error();
            },
        }

        let account = NewAccount {
            name,
            email,
            password,
        };
        match self.add_account.add(account).await {
            Ok(account) => ok(account),
            Err(err) => {
                tracing::error!(error = %err, "account creator failed");
                server_error()
            },
        }
    }
}

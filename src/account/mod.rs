mod repository;

pub use repository::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Account as returned by the account creator.
///
/// The signup controller treats this record as opaque and echoes it back
/// verbatim on success.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields handed to the account creator, nothing more.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account-creation collaborator.
///
/// Injected into the signup controller at construction; any error returned
/// here collapses to a `500` envelope at the controller boundary.
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: NewAccount) -> Result<Account>;
}

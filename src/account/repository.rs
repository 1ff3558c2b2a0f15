//! Process-local account storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use rand::RngCore;

use crate::account::{Account, AddAccount, NewAccount};
use crate::error::{Result, ServerError};

const ID_BYTES: usize = 16;

/// In-memory [`AddAccount`] implementation.
///
/// Accounts live for the lifetime of the process, keyed by a random
/// hex identifier.
#[derive(Clone, Default)]
pub struct AccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl AccountRepository {
    /// Create a new, empty [`AccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an account using `id` field.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Account>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| ServerError::internal("account store lock poisoned"))?;
        Ok(accounts.get(id).cloned())
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.read().map(|a| a.len()).unwrap_or_default()
    }

    /// Whether no account has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate a random 128-bit hex identifier.
fn generate_id() -> String {
    let mut bytes = [0u8; ID_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[async_trait]
impl AddAccount for AccountRepository {
    async fn add(&self, account: NewAccount) -> Result<Account> {
        let account = Account {
            id: generate_id(),
            name: account.name,
            email: account.email,
            password: account.password,
        };

        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| ServerError::internal("account store lock poisoned"))?;
        accounts.insert(account.id.clone(), account.clone());

        Ok(account)
    }
}

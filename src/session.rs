//! Account session passed explicitly to components that depend on it.
//!
//! A session starts empty, holds an account after `login`, and is cleared by
//! `logout`. Components read it through a shared reference, never from
//! global state.

use crate::errors::{DashboardResult, InvalidAccount};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::info;

const MIN_ACCOUNT_LEN: usize = 3;
const MAX_ACCOUNT_LEN: usize = 256;

fn principal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^k:[0-9a-fA-F]{64}$").expect("valid regex"))
}

/// A connected Kadena account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    account: String,
}

impl Account {
    /// Validate a Kadena account name: 3 to 256 printable, non-whitespace characters
    pub fn new(account: impl Into<String>) -> DashboardResult<Self> {
        let account = account.into();
        let len = account.chars().count();
        if !(MIN_ACCOUNT_LEN..=MAX_ACCOUNT_LEN).contains(&len) {
            return Err(InvalidAccount::with_account(
                format!(
                    "Account name must be {}-{} characters",
                    MIN_ACCOUNT_LEN, MAX_ACCOUNT_LEN
                ),
                account,
            )
            .into());
        }
        if account.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidAccount::with_account(
                "Account name contains whitespace or control characters",
                account,
            )
            .into());
        }
        Ok(Self { account })
    }

    pub fn as_str(&self) -> &str {
        &self.account
    }

    /// `k:` account bound to a single public key
    pub fn is_principal(&self) -> bool {
        principal_pattern().is_match(&self.account)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.account)
    }
}

/// Current account state of a dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSession {
    account: Option<Account>,
}

impl AccountSession {
    /// Session with no connected account
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that starts logged in
    pub fn with_account(account: Account) -> Self {
        Self {
            account: Some(account),
        }
    }

    pub fn login(&mut self, account: Account) {
        info!(account = %account, "Account connected");
        self.account = Some(account);
    }

    pub fn logout(&mut self) {
        if let Some(account) = self.account.take() {
            info!(account = %account, "Account disconnected");
        }
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_validation() {
        assert!(Account::new("alice").is_ok());
        assert!(Account::new("ab").is_err());
        assert!(Account::new("has space").is_err());
        assert!(Account::new("x".repeat(257)).is_err());
    }

    #[test]
    fn test_principal_account() {
        let key = "a".repeat(64);
        let account = Account::new(format!("k:{}", key)).unwrap();
        assert!(account.is_principal());
        assert!(!Account::new("alice").unwrap().is_principal());
    }

    #[test]
    fn test_session_lifecycle() {
        let mut session = AccountSession::new();
        assert!(!session.is_connected());

        session.login(Account::new("alice").unwrap());
        assert_eq!(session.account().map(|a| a.as_str()), Some("alice"));

        session.logout();
        assert!(session.account().is_none());
    }
}

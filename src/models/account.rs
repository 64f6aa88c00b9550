use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AccountError;

/// Kind of bank account. Stored as text (`COURANT` / `EPARGNE`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
pub enum AccountType {
    #[default]
    #[serde(rename = "COURANT", alias = "CURRENT")]
    Current,
    #[serde(rename = "EPARGNE", alias = "SAVINGS")]
    Savings,
}

impl AccountType {
    /// Text value used at the storage and wire boundaries
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Current => "COURANT",
            AccountType::Savings => "EPARGNE",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COURANT" | "CURRENT" => Ok(AccountType::Current),
            "EPARGNE" | "SAVINGS" => Ok(AccountType::Savings),
            other => Err(AccountError::Validation(format!(
                "unknown account type '{}', expected one of COURANT, EPARGNE",
                other
            ))),
        }
    }
}

/// A bank account record. `id` stays `None` until the storage layer assigns one.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Account {
    pub id: Option<i64>,
    pub balance: f64,
    pub creation_date: NaiveDate,
    pub account_type: AccountType,
}

impl Account {
    pub fn new(
        id: Option<i64>,
        balance: f64,
        creation_date: NaiveDate,
        account_type: AccountType,
    ) -> Self {
        Self {
            id,
            balance,
            creation_date,
            account_type,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_creation_date(mut self, creation_date: NaiveDate) -> Self {
        self.creation_date = creation_date;
        self
    }

    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }
}

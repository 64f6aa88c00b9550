use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Account, AccountError, AccountType};

/// Body accepted when creating or updating an account.
///
/// Dates and types arrive as raw strings so that malformed values surface as
/// validation errors instead of generic deserialization rejections.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    /// Ignored: identifiers are assigned by the storage layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[schema(example = 100.0)]
    pub solde: f64,
    #[schema(example = "2024-01-01")]
    pub date_creation: String,
    #[serde(rename = "type")]
    #[schema(example = "EPARGNE")]
    pub account_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: i64,
    pub solde: f64,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub date_creation: NaiveDate,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping only the date
pub fn parse_creation_date(raw: &str) -> Result<NaiveDate, AccountError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| AccountError::Validation(format!("malformed creation date '{}'", raw)))
}

impl TryFrom<AccountPayload> for Account {
    type Error = AccountError;

    fn try_from(payload: AccountPayload) -> Result<Self, Self::Error> {
        Ok(Account::default()
            .with_balance(payload.solde)
            .with_creation_date(parse_creation_date(&payload.date_creation)?)
            .with_account_type(payload.account_type.parse()?))
    }
}

impl TryFrom<Account> for AccountResponse {
    type Error = AccountError;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        let id = account.id.ok_or_else(|| {
            AccountError::Persistence("account returned without an identifier".to_string())
        })?;
        Ok(AccountResponse {
            id,
            solde: account.balance,
            date_creation: account.creation_date,
            account_type: account.account_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(date: &str, account_type: &str) -> AccountPayload {
        AccountPayload {
            id: Some(99),
            solde: 100.0,
            date_creation: date.to_string(),
            account_type: account_type.to_string(),
        }
    }

    #[test]
    fn payload_converts_without_keeping_client_id() {
        let account = Account::try_from(payload("2024-01-01", "SAVINGS")).unwrap();
        assert_eq!(account.id, None);
        assert_eq!(account.balance, 100.0);
        assert_eq!(account.creation_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(account.account_type, AccountType::Savings);
    }

    #[test]
    fn timestamps_are_truncated_to_a_date() {
        let date = parse_creation_date("2024-03-05T10:15:00+00:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for raw in ["", "05/03/2024", "2024-13-01", "yesterday"] {
            let err = parse_creation_date(raw).unwrap_err();
            assert!(matches!(err, AccountError::Validation(_)), "{raw}");
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = Account::try_from(payload("2024-01-01", "LIVRET")).unwrap_err();
        assert!(matches!(err, AccountError::Validation(_)));
    }

    #[test]
    fn response_uses_front_end_field_names() {
        let account = Account::new(
            Some(3),
            12.5,
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
            AccountType::Current,
        );
        let json = serde_json::to_value(AccountResponse::try_from(account).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "solde": 12.5,
                "dateCreation": "2023-06-30",
                "type": "COURANT"
            })
        );
    }

    #[test]
    fn unsaved_account_has_no_response() {
        assert!(AccountResponse::try_from(Account::default()).is_err());
    }
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::AccountRepository;
use crate::models::{Account, AccountError};

#[derive(Default)]
struct Store {
    accounts: BTreeMap<i64, Account>,
    last_id: i64,
}

/// Process-local account storage, used when no database is configured and in tests.
/// Identifiers grow monotonically and are never handed out twice.
#[derive(Default)]
pub struct InMemoryDatabase {
    store: RwLock<Store>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryDatabase {
    async fn get(&self, id: i64) -> Result<Account, AccountError> {
        let store = self.store.read().await;
        store
            .accounts
            .get(&id)
            .cloned()
            .ok_or(AccountError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Account>, AccountError> {
        let store = self.store.read().await;
        Ok(store.accounts.values().cloned().collect())
    }

    async fn save(&self, account: &Account) -> Result<Account, AccountError> {
        let mut store = self.store.write().await;
        let id = match account.id {
            Some(id) if store.accounts.contains_key(&id) => id,
            Some(id) => return Err(AccountError::NotFound(id)),
            None => {
                store.last_id += 1;
                store.last_id
            }
        };
        let saved = Account {
            id: Some(id),
            ..account.clone()
        };
        store.accounts.insert(id, saved.clone());
        debug!("Saved account {} in memory", id);
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<(), AccountError> {
        let mut store = self.store.write().await;
        store
            .accounts
            .remove(&id)
            .map(|_| ())
            .ok_or(AccountError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::AccountType;

    fn savings() -> Account {
        Account::default()
            .with_balance(100.0)
            .with_creation_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_account_type(AccountType::Savings)
    }

    #[tokio::test]
    async fn save_assigns_an_id_and_keeps_the_fields() {
        let db = InMemoryDatabase::new();
        let draft = savings();
        assert_eq!(draft.id, None);

        let saved = db.save(&draft).await.unwrap();
        assert!(saved.id.is_some());
        assert_eq!(saved.balance, 100.0);
        assert_eq!(saved.creation_date, draft.creation_date);
        assert_eq!(saved.account_type, AccountType::Savings);
        assert_eq!(db.get(saved.id.unwrap()).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn ids_are_unique_and_never_reused() {
        let db = InMemoryDatabase::new();
        let first = db.save(&savings()).await.unwrap().id.unwrap();
        let second = db.save(&savings()).await.unwrap().id.unwrap();
        assert_ne!(first, second);

        db.delete(second).await.unwrap();
        let third = db.save(&savings()).await.unwrap().id.unwrap();
        assert!(third > second);
    }

    #[tokio::test]
    async fn save_with_id_updates_in_place() {
        let db = InMemoryDatabase::new();
        let saved = db.save(&savings()).await.unwrap();

        let changed = saved
            .clone()
            .with_balance(-20.0)
            .with_account_type(AccountType::Current);
        let updated = db.save(&changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(db.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let db = InMemoryDatabase::new();
        let ghost = savings();
        let ghost = Account { id: Some(42), ..ghost };

        assert!(matches!(db.get(42).await, Err(AccountError::NotFound(42))));
        assert!(matches!(db.save(&ghost).await, Err(AccountError::NotFound(42))));
        assert!(matches!(db.delete(42).await, Err(AccountError::NotFound(42))));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let db = InMemoryDatabase::new();
        for balance in [3.0, 1.0, 2.0] {
            db.save(&savings().with_balance(balance)).await.unwrap();
        }
        let ids: Vec<i64> = db
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|account| account.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

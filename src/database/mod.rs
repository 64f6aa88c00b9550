mod memory;
mod schema;
pub use memory::InMemoryDatabase;
pub use schema::AccountSchema;

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgPoolOptions, postgres::PgRow, PgPool, Row};
use tracing::{debug, info};

use crate::models::{Account, AccountError, AccountType};

/// Storage port for account records
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fetch one account, failing with `NotFound` when the id is unknown
    async fn get(&self, id: i64) -> Result<Account, AccountError>;

    /// All accounts ordered by id
    async fn list(&self) -> Result<Vec<Account>, AccountError>;

    /// Insert when `id` is `None` (the storage assigns it), otherwise update
    async fn save(&self, account: &Account) -> Result<Account, AccountError>;

    async fn delete(&self, id: i64) -> Result<(), AccountError>;
}

/// Decodes the account type text read back from storage.
/// Unknown text means the stored row is corrupt, not that the client sent bad input.
pub fn account_type_from_storage(id: i64, stored: &str) -> Result<AccountType, AccountError> {
    stored.parse::<AccountType>().map_err(|_| {
        AccountError::Persistence(format!(
            "account {} has an unknown stored type '{}'",
            id, stored
        ))
    })
}

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str) -> Result<PgPool, AccountError> {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(4)
        .connect(db_url)
        .await?;
    Ok(pool)
}

pub struct PostgreDatabase {
    sqlx_db: PgPool,
    schema: AccountSchema,
}

impl PostgreDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        Self::with_schema(sqlx_db, AccountSchema::default())
    }

    pub fn with_schema(sqlx_db: PgPool, schema: AccountSchema) -> Self {
        PostgreDatabase { sqlx_db, schema }
    }

    /// Creates the account table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), AccountError> {
        sqlx::query(&self.schema.create_table_sql())
            .execute(&self.sqlx_db)
            .await?;
        info!("Table '{}' is ready", self.schema.table);
        Ok(())
    }

    fn account_from_row(&self, row: &PgRow) -> Result<Account, AccountError> {
        let id: i64 = row.try_get(self.schema.id)?;
        let balance: f64 = row.try_get(self.schema.balance)?;
        let creation_date: NaiveDate = row.try_get(self.schema.creation_date)?;
        let account_type: String = row.try_get(self.schema.account_type)?;
        Ok(Account::new(
            Some(id),
            balance,
            creation_date,
            account_type_from_storage(id, &account_type)?,
        ))
    }

    async fn insert(&self, account: &Account) -> Result<Account, AccountError> {
        let row = sqlx::query(&self.schema.insert_sql())
            .bind(account.balance)
            .bind(account.creation_date)
            .bind(account.account_type.as_str())
            .fetch_one(&self.sqlx_db)
            .await?;
        self.account_from_row(&row)
    }

    async fn update(&self, id: i64, account: &Account) -> Result<Account, AccountError> {
        let row = sqlx::query(&self.schema.update_sql())
            .bind(account.balance)
            .bind(account.creation_date)
            .bind(account.account_type.as_str())
            .bind(id)
            .fetch_optional(&self.sqlx_db)
            .await?
            .ok_or(AccountError::NotFound(id))?;
        self.account_from_row(&row)
    }
}

#[async_trait]
impl AccountRepository for PostgreDatabase {
    async fn get(&self, id: i64) -> Result<Account, AccountError> {
        let row = sqlx::query(&self.schema.select_one_sql())
            .bind(id)
            .fetch_optional(&self.sqlx_db)
            .await?
            .ok_or(AccountError::NotFound(id))?;
        self.account_from_row(&row)
    }

    async fn list(&self) -> Result<Vec<Account>, AccountError> {
        let rows = sqlx::query(&self.schema.select_all_sql())
            .fetch_all(&self.sqlx_db)
            .await?;
        rows.iter().map(|row| self.account_from_row(row)).collect()
    }

    async fn save(&self, account: &Account) -> Result<Account, AccountError> {
        let saved = match account.id {
            None => self.insert(account).await?,
            Some(id) => self.update(id, account).await?,
        };
        debug!("Saved account {:?}", saved.id);
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<(), AccountError> {
        let result = sqlx::query(&self.schema.delete_sql())
            .bind(id)
            .execute(&self.sqlx_db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id));
        }
        debug!("Deleted account {}", id);
        Ok(())
    }
}

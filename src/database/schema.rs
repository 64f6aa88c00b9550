/// Declarative mapping of the account record onto a relational table.
///
/// The SQL adapter builds every statement from these names, so the record
/// shape stays independent of the table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSchema {
    pub table: &'static str,
    pub id: &'static str,
    pub balance: &'static str,
    pub creation_date: &'static str,
    pub account_type: &'static str,
}

/// Default mapping: table `compte`, account type stored as text
pub const COMPTE: AccountSchema = AccountSchema {
    table: "compte",
    id: "id",
    balance: "solde",
    creation_date: "date_creation",
    account_type: "type",
};

impl Default for AccountSchema {
    fn default() -> Self {
        COMPTE
    }
}

impl AccountSchema {
    fn columns(&self) -> String {
        format!(
            "{}, {}, {}, \"{}\"",
            self.id, self.balance, self.creation_date, self.account_type
        )
    }

    pub fn create_table_sql(&self) -> String {
        format!(
            r#"CREATE TABLE IF NOT EXISTS {table} (
                {id} BIGSERIAL PRIMARY KEY,
                {balance} DOUBLE PRECISION NOT NULL,
                {date} DATE NOT NULL,
                "{kind}" VARCHAR(32) NOT NULL
            )"#,
            table = self.table,
            id = self.id,
            balance = self.balance,
            date = self.creation_date,
            kind = self.account_type,
        )
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} ({}, {}, \"{}\") VALUES ($1, $2, $3) RETURNING {}",
            self.table,
            self.balance,
            self.creation_date,
            self.account_type,
            self.columns()
        )
    }

    pub fn select_one_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = $1",
            self.columns(),
            self.table,
            self.id
        )
    }

    pub fn select_all_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} ORDER BY {}",
            self.columns(),
            self.table,
            self.id
        )
    }

    pub fn update_sql(&self) -> String {
        format!(
            "UPDATE {} SET {} = $1, {} = $2, \"{}\" = $3 WHERE {} = $4 RETURNING {}",
            self.table,
            self.balance,
            self.creation_date,
            self.account_type,
            self.id,
            self.columns()
        )
    }

    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE {} = $1", self.table, self.id)
    }
}

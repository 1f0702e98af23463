use crate::models::value::SqlValue;
use crate::utils::collapse_spaces;

/// Column order shared by the accounts INSERT statements and CSV header.
pub const ACCOUNT_COLUMNS: [&str; 9] = [
    "id",
    "old_id",
    "nome",
    "username",
    "VecchiaPasswd",
    "NuovaPasswd",
    "ruolo",
    "negozio",
    "AbilitaInsOrari",
];

/// Placeholder password assigned to every exported account.
pub const PLACEHOLDER_PASSWORD: &str = "AAA123";

const DEFAULT_ROLE: &str = "Dipendente";

/// One account row derived from a roster employee.
///
/// `display_name` and `username` are computed here, on collapsed name
/// parts: "Cognome Nome" for display, "Nome Cognome" for the login.
#[derive(Clone, Debug)]
pub struct AccountRecord {
    pub old_id: SqlValue,
    pub nome: String,
    pub cognome: String,
    pub display_name: String,
    pub username: String,
    pub negozio: SqlValue,
}

impl AccountRecord {
    /// Build an account from a positional source row:
    /// old_id, nome, cognome, negozio.
    pub fn from_row(row: Vec<SqlValue>) -> Self {
        let mut it = row.into_iter();
        let old_id = it.next().unwrap_or(SqlValue::Null);
        let nome = collapse_spaces(&it.next().unwrap_or(SqlValue::Null).text());
        let cognome = collapse_spaces(&it.next().unwrap_or(SqlValue::Null).text());
        let negozio = match it.next().unwrap_or(SqlValue::Null) {
            SqlValue::Text(s) if s.is_empty() => SqlValue::Null,
            other => other,
        };

        let display_name = collapse_spaces(&format!("{cognome} {nome}"));
        let username = collapse_spaces(&format!("{nome} {cognome}"));

        AccountRecord {
            old_id,
            nome,
            cognome,
            display_name,
            username,
            negozio,
        }
    }

    /// Personnel code this account references, when present.
    pub fn code(&self) -> Option<String> {
        match &self.old_id {
            SqlValue::Null => None,
            other => Some(other.text()),
        }
    }

    /// Values in `ACCOUNT_COLUMNS` order. The id, NuovaPasswd and
    /// AbilitaInsOrari columns are always NULL; the role is fixed.
    pub fn into_values(self) -> Vec<SqlValue> {
        vec![
            SqlValue::Null,
            self.old_id,
            SqlValue::Text(self.display_name),
            SqlValue::Text(self.username),
            SqlValue::Text(PLACEHOLDER_PASSWORD.to_string()),
            SqlValue::Null,
            SqlValue::Text(DEFAULT_ROLE.to_string()),
            self.negozio,
            SqlValue::Null,
        ]
    }
}

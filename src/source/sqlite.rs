//! SQLite-backed session, used for the `--db` mirror path and by the
//! integration tests.

use rusqlite::Connection;
use std::path::Path;

use crate::errors::AppResult;
use crate::models::value::SqlValue;
use crate::source::Session;

pub struct SqliteSession {
    conn: Connection,
}

impl SqliteSession {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}

impl Session for SqliteSession {
    fn execute(&mut self, sql: &str) -> AppResult<Vec<Vec<SqlValue>>> {
        let mut stmt = self.conn.prepare(sql)?;
        let ncols = stmt.column_count();

        let mut out = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(ncols);
            for i in 0..ncols {
                let value: rusqlite::types::Value = row.get(i)?;
                cells.push(SqlValue::from_sqlite(value));
            }
            out.push(cells);
        }
        Ok(out)
    }
}

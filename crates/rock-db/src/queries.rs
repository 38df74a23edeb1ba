use crate::models::{RockRow, TypeRow, UserRow};
use crate::Database;
use anyhow::Result;
use rusqlite::{Connection, Row};

const ROCK_SELECT: &str = "SELECT r.id, r.name, r.weight, r.user_id, r.type_id, t.label, u.first_name, u.last_name
     FROM rocks r
     JOIN types t ON r.type_id = t.id
     JOIN users u ON r.user_id = u.id";

impl Database {
    // -- Users --

    /// Returns `None` when the username is already taken.
    pub fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<i64>> {
        self.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT INTO users (username, password, first_name, last_name) VALUES (?1, ?2, ?3, ?4)",
                (username, password_hash, first_name, last_name),
            );
            match inserted {
                Ok(_) => Ok(Some(conn.last_insert_rowid())),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, username, password, first_name, last_name FROM users WHERE username = ?1",
                [username],
                user_from_row,
            )
            .optional()
        })
    }

    // -- Types --

    pub fn create_type(&self, label: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute("INSERT INTO types (label) VALUES (?1)", [label])?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_type(&self, id: i64) -> Result<Option<TypeRow>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT id, label FROM types WHERE id = ?1", [id], |row| {
                Ok(TypeRow {
                    id: row.get(0)?,
                    label: row.get(1)?,
                })
            })
            .optional()
        })
    }

    pub fn list_types(&self) -> Result<Vec<TypeRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, label FROM types ORDER BY id")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(TypeRow {
                        id: row.get(0)?,
                        label: row.get(1)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Rocks --

    pub fn insert_rock(&self, user_id: i64, type_id: i64, name: &str, weight: f64) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO rocks (name, weight, user_id, type_id) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![name, weight, user_id, type_id],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_rock(&self, id: i64) -> Result<Option<RockRow>> {
        self.with_conn(|conn| {
            conn.query_row(&format!("{ROCK_SELECT} WHERE r.id = ?1"), [id], rock_from_row)
                .optional()
        })
    }

    /// All rocks, or only those owned by `owner` when given. Ordered by id.
    pub fn list_rocks(&self, owner: Option<i64>) -> Result<Vec<RockRow>> {
        self.with_conn(|conn| query_rocks(conn, owner))
    }

    /// Returns false when no row matched, e.g. a concurrent delete won.
    pub fn delete_rock(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM rocks WHERE id = ?1", [id])?;
            Ok(removed > 0)
        })
    }
}

fn query_rocks(conn: &Connection, owner: Option<i64>) -> Result<Vec<RockRow>> {
    let rows = match owner {
        Some(user_id) => {
            let mut stmt = conn.prepare(&format!("{ROCK_SELECT} WHERE r.user_id = ?1 ORDER BY r.id"))?;
            let rows = stmt
                .query_map([user_id], rock_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(&format!("{ROCK_SELECT} ORDER BY r.id"))?;
            let rows = stmt
                .query_map([], rock_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        }
    };

    Ok(rows)
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
    })
}

fn rock_from_row(row: &Row<'_>) -> rusqlite::Result<RockRow> {
    Ok(RockRow {
        id: row.get(0)?,
        name: row.get(1)?,
        weight: row.get(2)?,
        user_id: row.get(3)?,
        type_id: row.get(4)?,
        type_label: row.get(5)?,
        owner_first_name: row.get(6)?,
        owner_last_name: row.get(7)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

//! Database row types. These map directly to SQLite rows and stay
//! independent of the JSON shapes in rock-types.

pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct TypeRow {
    pub id: i64,
    pub label: String,
}

/// A rock joined with its type label and its owner's names.
pub struct RockRow {
    pub id: i64,
    pub name: String,
    pub weight: f64,
    pub user_id: i64,
    pub type_id: i64,
    pub type_label: String,
    pub owner_first_name: String,
    pub owner_last_name: String,
}

use serde::{Deserialize, Serialize};

// -- JWT Claims --

/// JWT claims shared by the auth handlers (which mint tokens) and the
/// request middleware (which validates them). `sub` is the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub username: String,
    pub token: String,
}

// -- Rocks --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRockRequest {
    #[serde(rename = "typeId")]
    pub type_id: i64,
    pub name: String,
    pub weight: f64,
}

/// Query string for `GET /rocks`. Only `owner=current` narrows the result.
#[derive(Debug, Default)]
pub struct RockQuery {
    pub owner: Option<String>,
}

impl RockQuery {
    /// Build from raw query pairs. A repeated `owner` keeps its last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let owner = pairs
            .into_iter()
            .filter(|(key, _)| key == "owner")
            .map(|(_, value)| value)
            .last();
        Self { owner }
    }

    pub fn current_owner_only(&self) -> bool {
        self.owner.as_deref() == Some("current")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockResponse {
    pub id: i64,
    pub name: String,
    pub weight: f64,
    #[serde(rename = "type")]
    pub rock_type: RockTypeResponse,
    pub user: RockOwnerResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockTypeResponse {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockOwnerResponse {
    pub first_name: String,
    pub last_name: String,
}

// -- Types --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeResponse {
    pub id: i64,
    pub label: String,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

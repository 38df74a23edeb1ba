pub mod auth;
pub mod error;
pub mod middleware;
pub mod rocks;
pub mod router;
pub mod types;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Entities serialize with camelCase field names to match the public API
//! payload shape.

pub mod child;
pub mod family;
pub mod refresh_token;
pub mod user;
pub mod user_media;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod child_media_repo;
pub mod child_repo;
pub mod family_repo;
pub mod refresh_token_repo;
pub mod user_media_repo;
pub mod user_repo;

pub use child_media_repo::ChildMediaRepo;
pub use child_repo::ChildRepo;
pub use family_repo::FamilyRepo;
pub use refresh_token_repo::RefreshTokenRepo;
pub use user_media_repo::UserMediaRepo;
pub use user_repo::UserRepo;

//! HTTP handlers, one module per resource.

pub mod auth;
pub mod children;
pub mod family;
pub mod generation;
pub mod media;

//! Domain models for the shasha catalog API.

pub mod ad;
pub mod movie;
pub mod pagination;
pub mod series;
pub mod server;
pub mod settings;
pub mod user;

//! Business logic services, one per catalog collection.

pub mod ads;
pub mod catalog;
pub mod dashboard;
pub mod movies;
pub mod search;
pub mod series;
pub mod servers;
pub mod users;

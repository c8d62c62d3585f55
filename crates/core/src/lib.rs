//! Domain types, errors and validation shared by the diary crates.

pub mod diary;
pub mod error;
pub mod types;

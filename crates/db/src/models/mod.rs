//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO for request payloads
//! - The validated form of that DTO accepted by the repository

pub mod diary;

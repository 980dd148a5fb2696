//! Response models for the PokeAPI endpoints
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing API response bodies. The cache stores the raw bytes;
//! these types only exist on the consuming side.

pub mod responses;

// Re-export commonly used types
pub use responses::{LocationAreaPage, NamedResource};

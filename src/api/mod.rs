//! API Module
//!
//! HTTP client for the PokeAPI REST endpoints, with cache-first fetching.

mod client;

pub use client::PokeApiClient;

//! Pokedex CLI - an interactive PokeAPI browser
//!
//! Pages through PokeAPI location areas from a REPL, caching raw response
//! bodies in an in-memory TTL cache so repeated navigation does not re-issue
//! network requests.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use repl::Repl;
pub use tasks::spawn_reaper_task;

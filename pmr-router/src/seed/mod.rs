//! Seed import: bulk-loading the station graph at startup.

mod client;
mod document;
mod error;

pub use client::{SeedClient, SeedClientConfig};
pub use document::{SeedDocument, load_file};
pub use error::SeedError;

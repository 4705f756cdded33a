//! Catalog Collaborator
//!
//! The external content store holds menu items and inventory rows; the
//! pricing core only ever sees validated snapshots fetched through here.
//! Responses are cached in-process with short TTLs (menu data moves slowly,
//! inventory does not).

mod cache;
mod client;

pub use cache::TtlCache;
pub use client::{CatalogClient, CatalogSource};

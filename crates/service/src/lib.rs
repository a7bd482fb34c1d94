//! Service layer: the review/property filter-sort engines, the aggregator
//! proxy client, moderation state storage, and CSV export.
//! - Separates business logic from the HTTP surface in `server`.
//! - Reuses record definitions and validation from the `models` crate.

pub mod aggregator;
pub mod errors;
pub mod export;
pub mod file;
pub mod properties;
pub mod reviews;

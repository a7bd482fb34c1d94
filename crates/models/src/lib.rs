//! Flat data records for the review dashboard.
//! Entities are externally defined; there are no relational invariants and
//! no lifecycle beyond replacing fields on operator actions.

pub mod aggregator;
pub mod errors;
pub mod mock;
pub mod property;
pub mod review;
pub mod stats;

//! Database integration for seeding.
//!
//! The [`Seeder`] runs the per-entity seed routines against any
//! [`DealershipStore`](dealership::store::DealershipStore). A failed record is
//! logged and counted, never fatal to the routine.

#[cfg(test)]
pub(crate) mod memory;
mod seeder;

pub use seeder::{SeedError, SeedTally, Seeder};

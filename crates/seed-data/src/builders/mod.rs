//! Fluent builder API for seeding runs.
//!
//! The [`SeedPlan`] drives the five seed routines in order and reports a
//! [`SeedSummary`]; [`run`] wires it to a Postgres connection.

mod plan;

pub use plan::{SeedPlan, SeedSummary, exit_code, run};

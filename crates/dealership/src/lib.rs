//! Data model and Postgres persistence client for the dealership database.
//!
//! The seeding tools in `seed-data` talk to the database exclusively through
//! the [`store::DealershipStore`] trait; [`database::Database`] is its
//! `sqlx` implementation.

pub mod database;
pub mod errors;
pub mod models;
pub mod store;

//! Seed data generation for the dealership database.
//!
//! This crate populates the dealership schema with a static catalog of staff,
//! car models and trim versions, plus generated customers and colors.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let plan = SeedPlan::from_config(&config);
//! let outcome = run(&config, &plan).await;
//! let status = exit_code(&outcome);
//! ```

pub mod builders;
pub mod catalog;
pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{SeedPlan, SeedSummary, exit_code, run};
    pub use crate::catalog::{CARS, CarSeed, EMPLOYEES, EmployeeSeed, VERSIONS, VersionSeed};
    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedTally, Seeder};
    pub use crate::generators::{
        BirthDateWindow, CarGenerator, ColorGenerator, PersonGenerator, format_phone,
        generate_phone,
    };
    pub use dealership::database::Database;
    pub use dealership::store::DealershipStore;
}

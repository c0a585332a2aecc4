//! Per-entity seed routines.

use rand::Rng;
use thiserror::Error;
use time::Date;
use tracing::{info, warn};

use dealership::errors::DbError;
use dealership::models::NewCustomer;
use dealership::store::DealershipStore;

use crate::catalog::{CarSeed, EmployeeSeed, VersionSeed};
use crate::generators::{CarGenerator, ColorGenerator, PersonGenerator, generate_phone};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] DbError),
    #[error("Invalid birth date range: {start} .. {end}")]
    InvalidDateRange { start: Date, end: Date },
}

/// Outcome counts for one seed routine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedTally {
    pub attempted: usize,
    pub created: usize,
    pub failed: usize,
}

impl SeedTally {
    /// Counts a single-record create and logs its outcome.
    fn record(&mut self, entity: &str, label: &str, result: Result<(), DbError>) {
        self.attempted += 1;
        match result {
            Ok(()) => {
                self.created += 1;
                info!("{entity} {label} created");
            }
            Err(e) => {
                self.failed += 1;
                warn!("Failed to create {entity} {label}: {e}");
            }
        }
    }

    /// Combines two tallies.
    pub fn merge(self, other: SeedTally) -> SeedTally {
        SeedTally {
            attempted: self.attempted + other.attempted,
            created: self.created + other.created,
            failed: self.failed + other.failed,
        }
    }
}

/// Runs the seed routines against a store.
pub struct Seeder<'a, S: DealershipStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DealershipStore + ?Sized> Seeder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Seeds the catalog versions.
    pub async fn seed_versions(&self, versions: &[VersionSeed]) -> SeedTally {
        info!("Seeding {} versions...", versions.len());
        let mut tally = SeedTally::default();

        for seed in versions {
            let version = seed.to_new_version();
            let result = self.store.create_version(&version).await;
            tally.record("Version", &version.name, result);
        }

        info!("Seeded {}/{} versions", tally.created, tally.attempted);
        tally
    }

    /// Seeds the catalog employees, each with a freshly generated phone.
    pub async fn seed_employees(
        &self,
        employees: &[EmployeeSeed],
        rng: &mut impl Rng,
    ) -> SeedTally {
        info!("Seeding {} employees...", employees.len());
        let mut tally = SeedTally::default();

        for seed in employees {
            let employee = seed.to_new_employee(generate_phone(rng));
            let result = self.store.create_employee(&employee).await;
            tally.record("Employee", &employee.username, result);
        }

        info!("Seeded {}/{} employees", tally.created, tally.attempted);
        tally
    }

    /// Generates and seeds `count` customers.
    pub async fn seed_customers(
        &self,
        count: usize,
        people: &PersonGenerator,
        rng: &mut impl Rng,
    ) -> SeedTally {
        info!("Seeding {count} customers...");
        let mut tally = SeedTally::default();

        for _ in 0..count {
            let customer = NewCustomer::new(people.generate(rng));
            let result = self.store.create_customer(&customer).await;
            tally.record("Customer", &customer.details.name, result);
        }

        info!("Seeded {}/{} customers", tally.created, tally.attempted);
        tally
    }

    /// Seeds the catalog cars with a random manufacture year and stock quantity.
    pub async fn seed_cars(&self, cars: &[CarSeed], rng: &mut impl Rng) -> SeedTally {
        info!("Seeding {} cars...", cars.len());
        let car_gen = CarGenerator::new();
        let mut tally = SeedTally::default();

        for seed in cars {
            let car = car_gen.generate(seed, rng);
            let result = self.store.create_car(&car).await;
            tally.record("Car", &car.model, result);
        }

        info!("Seeded {}/{} cars", tally.created, tally.attempted);
        tally
    }

    /// Generates up to `attempts` distinct colors and inserts them in one call.
    ///
    /// The batch is all-or-nothing: a failed insert counts every color as failed.
    pub async fn seed_colors(
        &self,
        attempts: usize,
        colors: &ColorGenerator,
        rng: &mut impl Rng,
    ) -> SeedTally {
        let batch = colors.generate_batch(attempts, rng);
        info!(
            "Seeding {} colors ({} draws)...",
            batch.len(),
            attempts
        );

        let mut tally = SeedTally {
            attempted: batch.len(),
            ..SeedTally::default()
        };

        if batch.is_empty() {
            return tally;
        }

        match self.store.create_colors(&batch).await {
            Ok(created) => {
                tally.created = created as usize;
                info!("Seeded {} colors", tally.created);
            }
            Err(e) => {
                tally.failed = batch.len();
                warn!("Failed to create colors: {e}");
            }
        }

        tally
    }
}

//! Fluent builder for a complete seeding run.

use std::process::ExitCode;
use std::time::Instant;

use rand::Rng;
use time::{Date, OffsetDateTime};
use tracing::{error, info};

use dealership::database::Database;
use dealership::store::DealershipStore;

use crate::catalog::{CARS, CarSeed, EMPLOYEES, EmployeeSeed, VERSIONS, VersionSeed};
use crate::config::SeedConfig;
use crate::db::{SeedError, SeedTally, Seeder};
use crate::generators::{ColorGenerator, PersonGenerator};

/// Per-routine outcome of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub versions: SeedTally,
    pub employees: SeedTally,
    pub customers: SeedTally,
    pub cars: SeedTally,
    pub colors: SeedTally,
    /// Wall time of the run (milliseconds).
    pub elapsed_ms: u64,
}

impl SeedSummary {
    pub fn total(&self) -> SeedTally {
        self.versions
            .merge(self.employees)
            .merge(self.customers)
            .merge(self.cars)
            .merge(self.colors)
    }
}

/// What a run inserts: the static lists plus the generated counts.
///
/// # Example
///
/// ```rust,ignore
/// let summary = SeedPlan::new()
///     .with_customers(200)
///     .with_colors(8)
///     .execute(&db, today, &mut rng)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SeedPlan {
    versions: Vec<VersionSeed>,
    employees: Vec<EmployeeSeed>,
    customer_count: usize,
    cars: Vec<CarSeed>,
    color_count: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedPlan {
    /// Creates a plan with the full catalog and default counts.
    pub fn new() -> Self {
        let config = SeedConfig::default();
        Self {
            versions: VERSIONS.to_vec(),
            employees: EMPLOYEES.to_vec(),
            customer_count: config.customer_count,
            cars: CARS.to_vec(),
            color_count: config.color_count,
        }
    }

    /// Creates a plan with the full catalog and the counts from `config`.
    pub fn from_config(config: &SeedConfig) -> Self {
        Self::new()
            .with_customers(config.customer_count)
            .with_colors(config.color_count)
    }

    /// A plan that inserts nothing.
    pub fn empty() -> Self {
        Self {
            versions: Vec::new(),
            employees: Vec::new(),
            customer_count: 0,
            cars: Vec::new(),
            color_count: 0,
        }
    }

    pub fn with_versions(mut self, versions: Vec<VersionSeed>) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_employees(mut self, employees: Vec<EmployeeSeed>) -> Self {
        self.employees = employees;
        self
    }

    /// Sets the number of customers to generate.
    pub fn with_customers(mut self, count: usize) -> Self {
        self.customer_count = count;
        self
    }

    pub fn with_cars(mut self, cars: Vec<CarSeed>) -> Self {
        self.cars = cars;
        self
    }

    /// Sets the number of color draws.
    pub fn with_colors(mut self, count: usize) -> Self {
        self.color_count = count;
        self
    }

    /// Runs every routine in order, then releases the store.
    ///
    /// Order: versions, employees, customers, cars, colors. A routine's
    /// failures never gate the next one. `today` anchors the customers'
    /// birth date window.
    pub async fn execute<S: DealershipStore + ?Sized>(
        &self,
        store: &S,
        today: Date,
        rng: &mut impl Rng,
    ) -> Result<SeedSummary, SeedError> {
        let outcome = self.seed_all(store, today, rng).await;
        store.close().await;
        outcome
    }

    async fn seed_all<S: DealershipStore + ?Sized>(
        &self,
        store: &S,
        today: Date,
        rng: &mut impl Rng,
    ) -> Result<SeedSummary, SeedError> {
        let start = Instant::now();
        let seeder = Seeder::new(store);

        let versions = seeder.seed_versions(&self.versions).await;
        let employees = seeder.seed_employees(&self.employees, rng).await;

        let people = PersonGenerator::new(today)?;
        let customers = seeder.seed_customers(self.customer_count, &people, rng).await;

        let cars = seeder.seed_cars(&self.cars, rng).await;
        let colors = seeder
            .seed_colors(self.color_count, &ColorGenerator::new(), rng)
            .await;

        Ok(SeedSummary {
            versions,
            employees,
            customers,
            cars,
            colors,
            elapsed_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Connects to the database in `config` and executes `plan` against it.
pub async fn run(config: &SeedConfig, plan: &SeedPlan) -> Result<SeedSummary, SeedError> {
    let db = Database::connect(
        &config.database_url,
        config.max_connections,
        config.connect_timeout(),
    )
    .await
    .map_err(SeedError::Connect)?;

    info!("Connected to database");

    let mut rng = config.rng();
    let today = OffsetDateTime::now_utc().date();
    plan.execute(&db, today, &mut rng).await
}

/// Logs the outcome of a run and maps it to the process exit status.
pub fn exit_code(outcome: &Result<SeedSummary, SeedError>) -> ExitCode {
    match outcome {
        Ok(summary) => {
            let total = summary.total();
            info!("Seed completed in {} ms", summary.elapsed_ms);
            info!("  Versions: {}", summary.versions.created);
            info!("  Employees: {}", summary.employees.created);
            info!("  Customers: {}", summary.customers.created);
            info!("  Cars: {}", summary.cars.created);
            info!("  Colors: {}", summary.colors.created);
            info!("  Failed: {}/{}", total.failed, total.attempted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seed failed: {e}");
            ExitCode::FAILURE
        }
    }
}

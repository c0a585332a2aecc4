//! In-memory store used by the seeding tests.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use dealership::errors::DbError;
use dealership::models::{NewCar, NewColor, NewCustomer, NewEmployee, NewVersion};
use dealership::store::DealershipStore;

/// Rows accepted by a [`MemoryStore`].
#[derive(Debug, Default, Clone)]
pub struct Records {
    pub versions: Vec<NewVersion>,
    pub employees: Vec<NewEmployee>,
    pub customers: Vec<NewCustomer>,
    pub cars: Vec<NewCar>,
    pub colors: Vec<NewColor>,
    /// Create calls received, including failed ones.
    pub calls: usize,
}

/// Records every create call and fails the ones it was told to.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Records>,
    /// 1-based call numbers (across all entity kinds) that fail.
    failing_calls: HashSet<usize>,
    fail_all: bool,
    closes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing_calls: calls.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn failing_always() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Records {
        self.records.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Counts the call and applies `accept` unless the call is meant to fail.
    fn create(&self, accept: impl FnOnce(&mut Records)) -> Result<(), DbError> {
        let mut records = self.records.lock().unwrap();
        records.calls += 1;

        if self.fail_all || self.failing_calls.contains(&records.calls) {
            return Err(DbError::Rejected(format!("call {} refused", records.calls)));
        }

        accept(&mut records);
        Ok(())
    }
}

#[async_trait]
impl DealershipStore for MemoryStore {
    async fn create_version(&self, version: &NewVersion) -> Result<(), DbError> {
        self.create(|r| r.versions.push(version.clone()))
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<(), DbError> {
        self.create(|r| r.employees.push(employee.clone()))
    }

    async fn create_customer(&self, customer: &NewCustomer) -> Result<(), DbError> {
        self.create(|r| r.customers.push(customer.clone()))
    }

    async fn create_car(&self, car: &NewCar) -> Result<(), DbError> {
        self.create(|r| r.cars.push(car.clone()))
    }

    async fn create_colors(&self, colors: &[NewColor]) -> Result<u64, DbError> {
        self.create(|r| r.colors.extend_from_slice(colors))?;
        Ok(colors.len() as u64)
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

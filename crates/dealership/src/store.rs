//! Persistence contract consumed by the seeding routines.
//!
//! One create operation per entity kind, plus a bulk create for colors.
//! Every operation fails with a [`DbError`] on constraint violation or
//! connectivity failure.

use async_trait::async_trait;

use crate::errors::DbError;
use crate::models::{NewCar, NewColor, NewCustomer, NewEmployee, NewVersion};

#[async_trait]
pub trait DealershipStore: Send + Sync {
    async fn create_version(&self, version: &NewVersion) -> Result<(), DbError>;

    /// Creates the employee together with its person details.
    async fn create_employee(&self, employee: &NewEmployee) -> Result<(), DbError>;

    /// Creates the customer together with its person details.
    async fn create_customer(&self, customer: &NewCustomer) -> Result<(), DbError>;

    async fn create_car(&self, car: &NewCar) -> Result<(), DbError>;

    /// Inserts all colors in a single statement. Returns the number of rows created.
    async fn create_colors(&self, colors: &[NewColor]) -> Result<u64, DbError>;

    /// Releases the underlying connection(s). Called once at the end of a run.
    async fn close(&self);
}

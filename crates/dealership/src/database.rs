use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use crate::errors::DbError;
use crate::models::{NewCar, NewColor, NewCustomer, NewEmployee, NewVersion, PersonDetails};
use crate::store::DealershipStore;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url` and verifies a connection can be made.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn create_version(&self, version: &NewVersion) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO versions (id, name, price)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(version.id)
        .bind(&version.name)
        .bind(version.price)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let person_id = insert_person(&mut *tx, &employee.details).await?;

        sqlx::query(
            r#"
            INSERT INTO employees (id, person_id, username, password, salary, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(employee.id)
        .bind(person_id)
        .bind(&employee.username)
        .bind(&employee.password)
        .bind(employee.salary)
        .bind(&employee.role)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let person_id = insert_person(&mut *tx, &customer.details).await?;

        sqlx::query(
            r#"
            INSERT INTO customers (id, person_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(customer.id)
        .bind(person_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn create_car(&self, car: &NewCar) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO cars (id, model, price, manufacture_year, quantity)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(car.id)
        .bind(&car.model)
        .bind(car.price)
        .bind(car.manufacture_year)
        .bind(car.quantity)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn create_colors(&self, colors: &[NewColor]) -> Result<u64, DbError> {
        if colors.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO colors (id, name, price) ");
        builder.push_values(colors, |mut row, color| {
            row.push_bind(color.id)
                .push_bind(color.name.clone())
                .push_bind(color.price);
        });

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Inserts the person row that employees and customers reference.
async fn insert_person(conn: &mut PgConnection, details: &PersonDetails) -> Result<Uuid, DbError> {
    let person_id = Uuid::new_v4();
    debug!("Inserting person {person_id} ({})", details.name);

    sqlx::query(
        r#"
        INSERT INTO persons (id, name, phone, birth_date)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(person_id)
    .bind(&details.name)
    .bind(&details.phone)
    .bind(details.birth_date)
    .execute(&mut *conn)
    .await?;

    Ok(person_id)
}

#[async_trait]
impl DealershipStore for Database {
    async fn create_version(&self, version: &NewVersion) -> Result<(), DbError> {
        Database::create_version(self, version).await
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<(), DbError> {
        Database::create_employee(self, employee).await
    }

    async fn create_customer(&self, customer: &NewCustomer) -> Result<(), DbError> {
        Database::create_customer(self, customer).await
    }

    async fn create_car(&self, car: &NewCar) -> Result<(), DbError> {
        Database::create_car(self, car).await
    }

    async fn create_colors(&self, colors: &[NewColor]) -> Result<u64, DbError> {
        Database::create_colors(self, colors).await
    }

    async fn close(&self) {
        Database::close(self).await
    }
}

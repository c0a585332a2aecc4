use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Personal details shared by employees and customers.
///
/// Always inserted together with its owner, never on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    pub phone: String,
    pub birth_date: Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub id: Uuid,
    pub details: PersonDetails,
    pub username: String,
    pub password: String,
    pub salary: f64,
    pub role: String,
}

impl NewEmployee {
    pub fn new(
        details: PersonDetails,
        username: impl Into<String>,
        password: impl Into<String>,
        salary: f64,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            details,
            username: username.into(),
            password: password.into(),
            salary,
            role: role.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub id: Uuid,
    pub details: PersonDetails,
}

impl NewCustomer {
    pub fn new(details: PersonDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub id: Uuid,
    pub model: String,
    pub price: f64,
    pub manufacture_year: i32,
    /// Units available in stock.
    pub quantity: i32,
}

impl NewCar {
    pub fn new(model: impl Into<String>, price: f64, manufacture_year: i32, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            model: model.into(),
            price,
            manufacture_year,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewColor {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl NewColor {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
        }
    }
}

/// Trim level of a car model (e.g. "LT", "Premier").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVersion {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl NewVersion {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
        }
    }
}

//! Entity generators for seed data.
//!
//! This module provides generators for the fields the static catalog leaves out:
//! - [`phone`]: Brazilian phone numbers with the country code stripped
//! - [`PersonGenerator`]: Names, phones and adult birth dates for customers
//! - [`CarGenerator`]: Manufacture year and stock quantity for catalog cars
//! - [`ColorGenerator`]: Named colors with prices, deduplicated by name

pub mod car;
pub mod color;
pub mod person;
pub mod phone;

pub use car::{CarGenerator, MANUFACTURE_YEARS, STOCK_QUANTITY};
pub use color::{COLOR_PRICE_MAX, ColorGenerator};
pub use person::{BIRTH_DATE_FLOOR, BirthDateWindow, MINIMUM_AGE_YEARS, PersonGenerator};
pub use phone::{COUNTRY_CODE_PREFIX, format_phone, generate_phone};

//! Car stock generation for catalog models.

use std::ops::RangeInclusive;

use fake::Fake;
use rand::Rng;

use dealership::models::NewCar;

use crate::catalog::CarSeed;

/// Manufacture years handed out, inclusive.
pub const MANUFACTURE_YEARS: RangeInclusive<i32> = 2000..=2024;

/// Units in stock per car, inclusive.
pub const STOCK_QUANTITY: RangeInclusive<i32> = 2..=10;

/// Fills in the year and stock quantity of a catalog car.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarGenerator;

impl CarGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, seed: &CarSeed, rng: &mut impl Rng) -> NewCar {
        let manufacture_year: i32 = MANUFACTURE_YEARS.fake_with_rng(rng);
        let quantity = rng.gen_range(STOCK_QUANTITY);

        NewCar::new(seed.model, seed.price, manufacture_year, quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_car_within_bounds() {
        let car_gen = CarGenerator::new();
        let seed = CarSeed {
            model: "Onix",
            price: 89_990.0,
        };
        let mut rng = rand::thread_rng();

        let mut years = std::collections::HashSet::new();
        let mut quantities = std::collections::HashSet::new();

        for _ in 0..5000 {
            let car = car_gen.generate(&seed, &mut rng);
            assert_eq!(car.model, "Onix");
            assert_eq!(car.price, 89_990.0);
            assert!(MANUFACTURE_YEARS.contains(&car.manufacture_year));
            assert!(STOCK_QUANTITY.contains(&car.quantity));
            years.insert(car.manufacture_year);
            quantities.insert(car.quantity);
        }

        // Both bounds are reachable.
        assert!(years.contains(&2000) && years.contains(&2024));
        assert!(quantities.contains(&2) && quantities.contains(&10));
    }
}

//! Person details generation (names, phones, birth dates).

use fake::Fake;
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use rand::Rng;
use time::macros::date;
use time::{Date, Duration};

use dealership::models::PersonDetails;

use super::phone::generate_phone;
use crate::db::SeedError;

/// Earliest birth date handed out (exclusive).
pub const BIRTH_DATE_FLOOR: Date = date!(1950 - 01 - 01);

/// Generated people are at least this old on the day of the run.
pub const MINIMUM_AGE_YEARS: i32 = 18;

/// Open interval of birth dates: both bounds are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateWindow {
    start: Date,
    end: Date,
}

impl BirthDateWindow {
    /// Creates a window, which must leave at least one date strictly between the bounds.
    pub fn new(start: Date, end: Date) -> Result<Self, SeedError> {
        if end.to_julian_day() - start.to_julian_day() < 2 {
            return Err(SeedError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window from [`BIRTH_DATE_FLOOR`] to [`MINIMUM_AGE_YEARS`] before `today`.
    pub fn adults_on(today: Date) -> Result<Self, SeedError> {
        let end = years_before(today, MINIMUM_AGE_YEARS).ok_or(SeedError::InvalidDateRange {
            start: BIRTH_DATE_FLOOR,
            end: today,
        })?;
        Self::new(BIRTH_DATE_FLOOR, end)
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns true if `date` lies strictly inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start < date && date < self.end
    }

    /// Returns a uniformly distributed date strictly inside the window.
    pub fn sample(&self, rng: &mut impl Rng) -> Date {
        let span = self.end.to_julian_day() - self.start.to_julian_day();
        let offset = rng.gen_range(1..span);
        self.start + Duration::days(i64::from(offset))
    }
}

/// Same calendar day `years` earlier; Feb 29 falls back to Feb 28.
fn years_before(date: Date, years: i32) -> Option<Date> {
    let year = date.year() - years;
    date.replace_year(year)
        .or_else(|_| Date::from_calendar_date(year, date.month(), date.day() - 1))
        .ok()
}

/// Generates personal details for customers.
pub struct PersonGenerator {
    window: BirthDateWindow,
}

impl PersonGenerator {
    /// Creates a generator producing adults as of `today`.
    pub fn new(today: Date) -> Result<Self, SeedError> {
        Ok(Self::with_window(BirthDateWindow::adults_on(today)?))
    }

    pub fn with_window(window: BirthDateWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &BirthDateWindow {
        &self.window
    }

    /// Generates a single person.
    pub fn generate(&self, rng: &mut impl Rng) -> PersonDetails {
        let name: String = Name(PT_BR).fake_with_rng(rng);

        PersonDetails {
            name,
            phone: generate_phone(rng),
            birth_date: self.window.sample(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adult_window() {
        let window = BirthDateWindow::adults_on(date!(2024 - 06 - 15)).unwrap();
        assert_eq!(window.start(), date!(1950 - 01 - 01));
        assert_eq!(window.end(), date!(2006 - 06 - 15));
    }

    #[test]
    fn test_leap_day_falls_back() {
        let window = BirthDateWindow::adults_on(date!(2024 - 02 - 29)).unwrap();
        assert_eq!(window.end(), date!(2006 - 02 - 28));
    }

    #[test]
    fn test_window_too_narrow() {
        let day = date!(2000 - 01 - 01);
        assert!(BirthDateWindow::new(day, day).is_err());
        assert!(BirthDateWindow::new(day, day.next_day().unwrap()).is_err());
        assert!(BirthDateWindow::new(day, date!(2000 - 01 - 03)).is_ok());
        assert!(BirthDateWindow::adults_on(date!(1960 - 01 - 01)).is_err());
    }

    #[test]
    fn test_sample_excludes_bounds() {
        let mut rng = rand::thread_rng();
        let window = BirthDateWindow::new(date!(2000 - 01 - 01), date!(2000 - 01 - 03)).unwrap();

        for _ in 0..50 {
            assert_eq!(window.sample(&mut rng), date!(2000 - 01 - 02));
        }
    }

    #[test]
    fn test_generate_person() {
        let person_gen = PersonGenerator::new(date!(2024 - 10 - 01)).unwrap();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let person = person_gen.generate(&mut rng);
            assert!(!person.name.is_empty());
            assert!(!person.phone.starts_with("+55"));
            assert!(person_gen.window().contains(person.birth_date));
        }
    }
}

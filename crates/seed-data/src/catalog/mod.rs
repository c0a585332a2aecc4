//! Static seed data: the dealership's staff, car models and trim versions.

use time::Date;
use time::macros::date;

use dealership::models::{NewEmployee, NewVersion, PersonDetails};

/// A staff member as listed in the catalog. The phone is generated at seed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmployeeSeed {
    pub name: &'static str,
    pub birth_date: Date,
    pub username: &'static str,
    pub password: &'static str,
    pub salary: f64,
    pub role: &'static str,
}

impl EmployeeSeed {
    /// Builds the insert payload, attaching `phone` to the person details.
    pub fn to_new_employee(&self, phone: String) -> NewEmployee {
        NewEmployee::new(
            PersonDetails {
                name: self.name.to_string(),
                phone,
                birth_date: self.birth_date,
            },
            self.username,
            self.password,
            self.salary,
            self.role,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarSeed {
    pub model: &'static str,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionSeed {
    pub name: &'static str,
    pub price: f64,
}

impl VersionSeed {
    pub fn to_new_version(&self) -> NewVersion {
        NewVersion::new(self.name, self.price)
    }
}

pub const EMPLOYEES: &[EmployeeSeed] = &[
    EmployeeSeed {
        name: "Carlos Eduardo Almeida",
        birth_date: date!(1978 - 03 - 12),
        username: "carlos.almeida",
        password: "gerente@2024",
        salary: 12_500.0,
        role: "Gerente",
    },
    EmployeeSeed {
        name: "Fernanda Ribeiro Souza",
        birth_date: date!(1990 - 07 - 25),
        username: "fernanda.souza",
        password: "vendas#fer90",
        salary: 4_800.0,
        role: "Vendedor",
    },
    EmployeeSeed {
        name: "João Pedro Martins",
        birth_date: date!(1995 - 11 - 03),
        username: "joao.martins",
        password: "jp!martins95",
        salary: 4_200.0,
        role: "Vendedor",
    },
    EmployeeSeed {
        name: "Mariana Costa Lima",
        birth_date: date!(1987 - 01 - 30),
        username: "mariana.lima",
        password: "financeiro87",
        salary: 6_300.0,
        role: "Financeiro",
    },
    EmployeeSeed {
        name: "Ricardo Nogueira Santos",
        birth_date: date!(1982 - 09 - 18),
        username: "ricardo.santos",
        password: "oficina$rs82",
        salary: 5_100.0,
        role: "Mecânico",
    },
];

pub const CARS: &[CarSeed] = &[
    CarSeed {
        model: "Onix",
        price: 89_990.0,
    },
    CarSeed {
        model: "HB20",
        price: 84_490.0,
    },
    CarSeed {
        model: "Corolla",
        price: 159_990.0,
    },
    CarSeed {
        model: "Civic",
        price: 174_900.0,
    },
    CarSeed {
        model: "Compass",
        price: 199_990.0,
    },
    CarSeed {
        model: "Polo",
        price: 92_790.0,
    },
    CarSeed {
        model: "Strada",
        price: 109_990.0,
    },
    CarSeed {
        model: "Renegade",
        price: 134_990.0,
    },
];

pub const VERSIONS: &[VersionSeed] = &[
    VersionSeed {
        name: "Básica",
        price: 0.0,
    },
    VersionSeed {
        name: "LT",
        price: 6_500.0,
    },
    VersionSeed {
        name: "LTZ",
        price: 12_900.0,
    },
    VersionSeed {
        name: "Premier",
        price: 21_500.0,
    },
    VersionSeed {
        name: "Sport",
        price: 17_800.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_usernames_are_unique() {
        let usernames: HashSet<_> = EMPLOYEES.iter().map(|e| e.username).collect();
        assert_eq!(usernames.len(), EMPLOYEES.len());
    }

    #[test]
    fn test_employee_payload() {
        let employee = EMPLOYEES[0].to_new_employee("(11) 3333-4444".to_string());
        assert_eq!(employee.details.name, EMPLOYEES[0].name);
        assert_eq!(employee.details.phone, "(11) 3333-4444");
        assert_eq!(employee.details.birth_date, EMPLOYEES[0].birth_date);
        assert_eq!(employee.username, EMPLOYEES[0].username);
        assert_eq!(employee.role, "Gerente");
    }

    #[test]
    fn test_catalog_prices_are_non_negative() {
        assert!(CARS.iter().all(|c| c.price > 0.0));
        assert!(VERSIONS.iter().all(|v| v.price >= 0.0));
    }
}

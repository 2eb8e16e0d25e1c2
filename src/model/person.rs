use serde::{Deserialize, Serialize};

use crate::consts::consts::Year;

/// Serialized as `{"name", "birthYear", "deathYear"}`, in that order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub birth_year: Year,
    pub death_year: Year,
}

impl Person {
    pub fn new(name: String, birth_year: Year, death_year: Year) -> Self {
        Person {
            name,
            birth_year,
            death_year,
        }
    }

    /// Both ends inclusive
    pub fn is_alive_in(&self, year: Year) -> bool {
        self.birth_year <= year && year <= self.death_year
    }

    pub fn new_test() -> Self {
        Person {
            name: "Full Name".to_string(),
            birth_year: 1920,
            death_year: 1980,
        }
    }
}

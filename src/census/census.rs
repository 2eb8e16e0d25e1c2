use std::{collections::BTreeMap, io::Write};

use thiserror::Error;

use crate::{
    consts::consts::{Year, YEAR_RANGE},
    model::person::Person,
};

/// Names of the people alive in each year, in dataset order
pub type PeopleByYear = BTreeMap<Year, Vec<String>>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CensusError {
    #[error("The dataset is empty")]
    EmptyDataset,

    #[error("Person at index {0} has an empty name")]
    EmptyName(usize),

    #[error("Person ({0}) has birth year ({1}) out of valid range {}", YEAR_RANGE)]
    BirthYearOutOfRange(String, Year),

    #[error("Person ({0}) has death year ({1}) out of valid range {}", YEAR_RANGE)]
    DeathYearOutOfRange(String, Year),

    #[error("Person ({0}) died before they were born: {1} - {2}")]
    DiedBeforeBorn(String, Year, Year),
}

#[derive(Debug, PartialEq, Eq)]
pub struct LiveliestYears {
    pub people_alive: usize,
    /// Ascending
    pub years: Vec<Year>,
}

fn validate(index: usize, person: &Person) -> Result<(), CensusError> {
    if person.name.is_empty() {
        return Err(CensusError::EmptyName(index));
    }

    if !YEAR_RANGE.contains(person.birth_year) {
        return Err(CensusError::BirthYearOutOfRange(
            person.name.clone(),
            person.birth_year,
        ));
    }

    if !YEAR_RANGE.contains(person.death_year) {
        return Err(CensusError::DeathYearOutOfRange(
            person.name.clone(),
            person.death_year,
        ));
    }

    if person.death_year < person.birth_year {
        return Err(CensusError::DiedBeforeBorn(
            person.name.clone(),
            person.birth_year,
            person.death_year,
        ));
    }

    Ok(())
}

/// Fails on the first invalid person, nothing is counted in that case
pub fn people_alive_per_year(people: &[Person]) -> Result<PeopleByYear, CensusError> {
    if people.is_empty() {
        return Err(CensusError::EmptyDataset);
    }

    let mut people_by_year = PeopleByYear::new();

    for (index, person) in people.iter().enumerate() {
        validate(index, person)?;

        for year in person.birth_year..=person.death_year {
            people_by_year
                .entry(year)
                .or_default()
                .push(person.name.clone());
        }
    }

    Ok(people_by_year)
}

pub fn liveliest_years(people_by_year: &PeopleByYear) -> LiveliestYears {
    let people_alive = people_by_year
        .values()
        .map(Vec::len)
        .max()
        .unwrap_or_default();

    let years = people_by_year
        .iter()
        .filter(|(_, names)| names.len() == people_alive)
        .map(|(year, _)| *year)
        .collect();

    LiveliestYears {
        people_alive,
        years,
    }
}

/// ```text
/// Most number of people alive: 2
/// Year(s) with most people alive:
/// \t1955 - Ada Byron, Alan Turing
/// ```
pub fn write_report<W: Write>(
    out: &mut W,
    liveliest: &LiveliestYears,
    people_by_year: &PeopleByYear,
) -> std::io::Result<()> {
    writeln!(out, "Most number of people alive: {}", liveliest.people_alive)?;
    writeln!(out, "Year(s) with most people alive:")?;

    for year in &liveliest.years {
        let names = people_by_year
            .get(year)
            .map(|names| names.join(", "))
            .unwrap_or_default();

        writeln!(out, "\t{} - {}", year, names)?;
    }

    Ok(())
}

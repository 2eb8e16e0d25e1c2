use num_format::{Locale, ToFormattedString};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    consts::consts::{BoundedRange, PersonCount, YEAR_RANGE},
    model::{names::random_full_name, person::Person},
};

use super::options::GeneratorOptions;

pub struct Generator {
    rng: StdRng,
    years: BoundedRange,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                log::debug!("Seeding generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            years: YEAR_RANGE,
        }
    }

    pub fn from_options(options: &GeneratorOptions) -> Self {
        Generator::new(options.seed)
    }

    /// Death year is sampled from `[birth_year, max]` so it can never precede the birth year
    pub fn generate_person(&mut self) -> Person {
        let birth_year = self.sample(self.years);
        let death_year = self.sample(self.years.starting_at(birth_year));
        let name = random_full_name(&mut self.rng);

        Person::new(name, birth_year, death_year)
    }

    /// Generates the dataset in order, one independent person at a time
    pub fn generate(&mut self, count: PersonCount) -> Vec<Person> {
        let count = count.to_number();

        log::info!(
            "Generating {} random people",
            count.to_formatted_string(&Locale::en)
        );

        (0..count).map(|_| self.generate_person()).collect()
    }

    fn sample(&mut self, range: BoundedRange) -> u32 {
        self.rng.gen_range(range.min..=range.max)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::consts::consts::{MAX_DEATH_YEAR, MIN_BIRTH_YEAR};

    fn count(value: i64) -> PersonCount {
        PersonCount::try_from(value).unwrap()
    }

    mod generate {
        use super::*;

        #[rstest]
        #[case(1)]
        #[case(2)]
        #[case(500)]
        #[case(9001)]
        fn produces_requested_number_of_people(#[case] requested: i64) {
            let mut generator = Generator::new(Some(1));

            let people = generator.generate(count(requested));

            assert_eq!(people.len() as i64, requested);
        }

        #[test]
        fn years_stay_within_bounds_and_order() {
            let mut generator = Generator::new(Some(2024));

            let people = generator.generate(count(9001));

            for person in people {
                assert!(
                    MIN_BIRTH_YEAR <= person.birth_year
                        && person.birth_year <= person.death_year
                        && person.death_year <= MAX_DEATH_YEAR,
                    "Invalid years for {:?}",
                    person
                );
            }
        }

        #[test]
        fn names_are_never_empty() {
            let mut generator = Generator::new(Some(5));

            assert!(generator
                .generate(count(100))
                .iter()
                .all(|person| !person.name.trim().is_empty()));
        }

        #[test]
        fn same_seed_same_people() {
            let people_one = Generator::new(Some(11)).generate(count(50));
            let people_two = Generator::new(Some(11)).generate(count(50));

            assert_eq!(people_one, people_two);
        }

        #[test]
        fn different_seed_different_people() {
            let people_one = Generator::new(Some(11)).generate(count(50));
            let people_two = Generator::new(Some(12)).generate(count(50));

            assert_ne!(people_one, people_two);
        }

        #[test]
        fn from_options_uses_seed() {
            let options = GeneratorOptions::new_test(10);

            let people_one = Generator::from_options(&options).generate(options.count);
            let people_two = Generator::new(Some(42)).generate(count(10));

            assert_eq!(people_one, people_two);
        }
    }

    mod sampling {
        use super::*;

        #[test]
        fn covers_both_ends_of_year_range() {
            let mut generator = Generator::new(Some(9));

            let births: Vec<u32> = (0..20_000).map(|_| generator.sample(YEAR_RANGE)).collect();

            assert!(births.contains(&MIN_BIRTH_YEAR));
            assert!(births.contains(&MAX_DEATH_YEAR));
        }

        #[test]
        fn single_value_range() {
            let mut generator = Generator::new(Some(9));

            assert_eq!(generator.sample(BoundedRange::new(2000, 2000)), 2000);
        }
    }
}

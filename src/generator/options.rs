use std::path::PathBuf;

use crate::consts::consts::PersonCount;

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub count: PersonCount,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl GeneratorOptions {
    pub fn set_count(mut self, count: PersonCount) -> Self {
        self.count = count;
        self
    }

    /// Destination of the dataset, overwritten if it already exists
    pub fn set_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    /// Fixes the random source so the same options always produce the same dataset.
    /// When unset the generator is seeded from OS entropy
    pub fn set_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            count: PersonCount::default(),
            output: PathBuf::from("people.json"),
            seed: None,
        }
    }
}

#[cfg(test)]
impl GeneratorOptions {
    pub fn new_test(count: usize) -> Self {
        let count: PersonCount = i64::try_from(count)
            .ok()
            .and_then(|count| PersonCount::try_from(count).ok())
            .expect("Test count should be in range");

        GeneratorOptions::default()
            .set_count(count)
            .set_seed(Some(42))
    }
}

pub mod names;
pub mod person;

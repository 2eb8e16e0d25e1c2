pub mod generator;
pub mod options;

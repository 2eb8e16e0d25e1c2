pub mod census;
pub mod consts;
pub mod generator;
pub mod model;
pub mod persistence;

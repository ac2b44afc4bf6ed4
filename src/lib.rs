pub mod bench;
pub mod config;
pub mod display;
pub mod errors;
pub mod parse;
pub mod solver;
pub mod types;
pub mod weights;

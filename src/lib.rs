
#[macro_use]
pub mod cli;
pub mod error;
pub mod model;

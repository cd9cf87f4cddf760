//! Domain models for the pizza configurator

mod configuration;
mod recipe;

pub use configuration::*;
pub use recipe::*;

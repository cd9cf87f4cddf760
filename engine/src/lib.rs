//! Recipe engine for the pizza configurator
//!
//! Turns a pizza configuration into ingredient quantities, a timed
//! step-by-step recipe and a shopping list, in German or English and in
//! metric or US customary units. The engine is pure; UI state lives in the
//! wasm crate.

pub mod engine;
pub mod error;
pub mod generation;
pub mod i18n;
pub mod models;
pub mod normalize;
pub mod quantities;
pub mod schedule;
pub mod shopping;
pub mod steps;
pub mod summary;
pub mod types;
pub mod units;
pub mod validation;

pub use engine::*;
pub use error::{ConfigurationError, DateField, DateParseError, UnknownOption};
pub use generation::*;
pub use models::*;
pub use normalize::RawConfiguration;
pub use quantities::{DerivedQuantities, PredoughSplit};
pub use schedule::ScheduleMoments;
pub use shopping::shopping_list_title;
pub use summary::summarize_configuration;
pub use types::*;

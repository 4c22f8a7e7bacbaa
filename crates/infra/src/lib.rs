//! Infrastructure layer: sample data, query engine, data actions, upload storage.

pub mod command_dispatcher;
pub mod fixture;
pub mod projections;
pub mod query;
pub mod uploads;

pub use fixture::Dataset;

//! Sales records and sales totals.

pub mod record;

pub use record::{SalesRecord, SalesTotals};

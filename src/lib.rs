pub mod types;
pub mod tables;
pub mod convert;
pub mod app;

pub use types::*;
pub use tables::{list_categories, list_units, lookup, lookup_named, FactorTable};
pub use convert::{convert, convert_all, convert_named, convert_request};

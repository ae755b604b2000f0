//! Core types for freight data mapping

mod mapping;
mod table;
mod value;

pub use mapping::*;
pub use table::*;
pub use value::*;

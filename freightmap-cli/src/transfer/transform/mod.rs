//! Mapping engine: column mapper, enrichment and the processing pipeline

mod engine;
mod enrich;
mod mapper;

pub use engine::{ProcessReport, process_files};

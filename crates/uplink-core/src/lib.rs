//! Core report model and the pure stages of the upload pipeline.
//!
//! This crate owns the caller-facing report types (a report, its nested test
//! tree, artifacts, and metric rollups), structural validation, and the
//! depth-first traversal that turns the tree into an ordered sequence of
//! upload units. Everything here is synchronous and free of I/O; conversion,
//! storage, and transmission live in the `uplink-artifact` and
//! `uplink-client` crates.

pub mod error;
pub mod flatten;
pub mod report;
mod validate;

pub use error::ReportError;
pub use flatten::{flatten, FlatTest};
pub use report::{Artifact, BucketConfiguration, Conversion, Metric, Report, Test};

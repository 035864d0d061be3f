//! Data layer for launch-trends.
//!
//! Responsible for reading GCAT-style catalog TSV files into launch records
//! and aggregating those records into cumulative per-period counts.

pub mod aggregator;
pub mod catalog;

pub use launch_core as core;

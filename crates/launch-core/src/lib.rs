//! Core domain logic for launch-trends.
//!
//! Holds the Vague Date parser, timezone utilities, the shared domain models
//! and the error taxonomy. This crate is pure computation – it performs no
//! file or network I/O.

pub mod error;
pub mod models;
pub mod time_utils;
pub mod vague_date;

pub use error::{LaunchError, Result};

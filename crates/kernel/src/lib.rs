//! Elenco Report Kernel Library
//!
//! This library exposes kernel internals for integration testing.
//! The main entry point for printing the report is the `elenco` binary.

pub mod config;
pub mod error;
pub mod listing;
pub mod report;
pub mod state;

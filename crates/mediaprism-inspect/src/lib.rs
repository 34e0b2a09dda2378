//! mediaPrism inspect library entry.
//!
//! Wires the argument parser, the strict config loader and the per-file
//! report around the core decoder. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod cli;
pub mod config;
pub mod report;

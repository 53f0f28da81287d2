//! Benchmark utilities for eventuality.
//!
//! This crate provides the fixtures used by the Criterion benchmarks in `benches/`:
//!
//! - **Payloads**: a small, copyable argument type passed to every callback
//! - **Callbacks**: batches of distinct callbacks that do a measurable amount of work
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p eventuality_bench
//!
//! # Run specific benchmark group
//! cargo bench -p eventuality_bench -- call
//! ```
//!
//! # Benchmark Results
//!
//! Results are written to `target/criterion/` with HTML reports for visualization.

pub mod fixtures;

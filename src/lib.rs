//! Case Fee Report
//!
//! Joins legal case records with fee percentages, derives the estimated
//! fee for each case and reports summary metrics over the result.
//!
//! This crate provides the core implementation for the
//! `case-fee` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! case-fee report --cases processos.csv --fees honorarios.csv
//! case-fee --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod session;
pub mod utils;

//! Moneyfold - envelope budgeting from the command line
//!
//! This library provides the core functionality for the Moneyfold budgeting
//! application: importing heterogeneous bank CSV exports, allocating income
//! across envelopes, and categorizing expenses with merchant-memory
//! suggestions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (envelopes, transactions, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (normalization, import, allocation,
//!   categorization, sessions)
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers bridging clap to the service layer
//!
//! # Example
//!
//! ```rust,ignore
//! use moneyfold::config::paths::MoneyfoldPaths;
//! use moneyfold::storage::Storage;
//!
//! let paths = MoneyfoldPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::MoneyfoldError;

//! cardcycle - credit card billing and performance periods
//!
//! Card issuers measure spending over performance windows that rarely match
//! calendar months, and charge each window on a billing day that can fall in
//! the same or the following month. This crate maps card configurations to
//! those windows and builds a monthly dashboard of cashflow, per-card tier
//! progress and expected billing.
//!
//! # Architecture
//!
//! - `calendar`: pure date window engine
//! - `models`: payment methods, benefit tiers, transactions and value types
//! - `services`: cashflow, performance, billing, labels, trends, dashboard
//! - `storage`: JSON ledger loading with atomic writes
//! - `config`: paths and user settings
//! - `display`: plain-text formatting
//! - `cli`: command handlers for the `cardcycle` binary
//!
//! # Example
//!
//! ```
//! use cardcycle::calendar::{billing_month_key, performance_window};
//! use cardcycle::models::YearMonth;
//!
//! let window = performance_window(YearMonth::new(2025, 3), 15);
//! assert_eq!(window.start.to_string(), "2025-02-15");
//! assert_eq!(billing_month_key(window.end, 14).to_string(), "2025-04");
//! ```

pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CardcycleError, CardcycleResult};
